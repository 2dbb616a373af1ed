//! Listing rows: opaque handles carrying a precomputed search blob.

use serde::Serialize;

use crate::domain::types::RowId;

/// A record that can be shown as a row in a filterable listing.
pub trait Searchable {
    /// Identifier of the row this record produces.
    fn row_id(&self) -> RowId;

    /// Short text identifying the record to a reader.
    fn label(&self) -> String;

    /// Text value of the named field, if the record has such a field.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Entire textual content of the record.
    fn full_text(&self) -> String;
}

/// One listing entry.
///
/// The visibility flag is owned by the table controller; a row never changes
/// it on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    id: RowId,
    label: String,
    search_blob: String,
    visible: bool,
}

impl Row {
    /// Creates a row whose search blob is lower-cased once, up front.
    pub fn new(id: RowId, label: impl Into<String>, searchable_text: &str) -> Self {
        Self {
            id,
            label: label.into(),
            search_blob: searchable_text.to_lowercase(),
            visible: true,
        }
    }

    /// Builds a row from a record using the declared searchable fields, or
    /// the record's full text when no fields are declared.
    pub fn from_record<T: Searchable + ?Sized>(record: &T, fields: Option<&[String]>) -> Self {
        let text = match fields {
            Some(fields) if !fields.is_empty() => fields
                .iter()
                .filter_map(|field| {
                    let value = record.field_value(field);
                    if value.is_none() {
                        log::debug!("Record {} has no searchable field `{field}`", record.row_id());
                    }
                    value
                })
                .collect::<Vec<_>>()
                .join(" "),
            _ => record.full_text(),
        };
        Self::new(record.row_id(), record.label(), &text)
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn search_blob(&self) -> &str {
        &self.search_blob
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Builds rows for every record, keeping record order.
pub fn build_rows<T: Searchable>(records: &[T], fields: Option<&[String]>) -> Vec<Row> {
    records
        .iter()
        .map(|record| Row::from_record(record, fields))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        id: i64,
        title: &'static str,
        body: &'static str,
    }

    impl Searchable for Note {
        fn row_id(&self) -> RowId {
            RowId::new(self.id).unwrap()
        }

        fn label(&self) -> String {
            self.title.to_string()
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "title" => Some(self.title.to_string()),
                "body" => Some(self.body.to_string()),
                _ => None,
            }
        }

        fn full_text(&self) -> String {
            format!("{} {}", self.title, self.body)
        }
    }

    #[test]
    fn declared_fields_limit_the_corpus() {
        let note = Note {
            id: 1,
            title: "Foil Island",
            body: "Played",
        };
        let fields = vec!["title".to_string(), "missing".to_string()];

        let row = Row::from_record(&note, Some(&fields));

        assert_eq!(row.search_blob(), "foil island");
        assert_eq!(row.label(), "Foil Island");
        assert!(row.is_visible());
    }

    #[test]
    fn no_fields_uses_full_text() {
        let note = Note {
            id: 2,
            title: "Forest",
            body: "Near MINT",
        };

        let row = Row::from_record(&note, None);

        assert_eq!(row.search_blob(), "forest near mint");
    }

    #[test]
    fn build_rows_preserves_order() {
        let notes = [
            Note {
                id: 3,
                title: "C",
                body: "",
            },
            Note {
                id: 1,
                title: "A",
                body: "",
            },
        ];

        let ids: Vec<i64> = build_rows(&notes, None).iter().map(|r| r.id().get()).collect();

        assert_eq!(ids, vec![3, 1]);
    }
}
