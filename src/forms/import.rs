//! Card inventory import from marketplace CSV exports.

use std::collections::HashMap;
use std::io::Read;

use csv::StringRecord;
use thiserror::Error;

use crate::domain::card::NewCard;
use crate::domain::price::parse_price_cents;
use crate::domain::types::ItemName;

#[derive(Debug, Error)]
/// Errors that can occur when reading an inventory CSV.
pub enum ImportError {
    #[error("CSV file is missing a header row")]
    MissingHeader,

    #[error("unrecognized CSV header layout")]
    UnrecognizedLayout,

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

/// Export layouts the importer understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryFileType {
    /// TCGplayer collection export.
    TcgPlayer,
    /// TCG Live / seller inventory export.
    TcgLive,
}

const TCGPLAYER_HEADERS: [&str; 6] = [
    "quantity",
    "name",
    "set code",
    "card number",
    "printing",
    "condition",
];

const TCGLIVE_HEADERS: [&str; 5] = [
    "tcgplayer id",
    "product name",
    "set name",
    "total quantity",
    "condition",
];

/// Lower-cases a header, strips a byte-order mark and collapses whitespace.
fn normalize_header(header: &str) -> String {
    header
        .trim()
        .trim_start_matches('\u{feff}')
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn detect_file_type(headers: &HashMap<String, usize>) -> Result<InventoryFileType, ImportError> {
    if TCGPLAYER_HEADERS.iter().all(|h| headers.contains_key(*h)) {
        Ok(InventoryFileType::TcgPlayer)
    } else if TCGLIVE_HEADERS.iter().all(|h| headers.contains_key(*h)) {
        Ok(InventoryFileType::TcgLive)
    } else {
        Err(ImportError::UnrecognizedLayout)
    }
}

/// One CSV record with access by normalized header name.
struct CsvRow<'a> {
    headers: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl CsvRow<'_> {
    fn field(&self, key: &str) -> Option<&str> {
        self.headers
            .get(key)
            .and_then(|&index| self.record.get(index))
    }

    /// First of `keys` whose value is non-empty.
    fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.field(key))
            .find(|value| !value.is_empty())
    }

    fn is_blank(&self) -> bool {
        self.record.iter().all(|value| value.trim().is_empty())
    }
}

/// Integer parse that accepts decimal notation; anything unparseable is zero.
fn parse_quantity(value: Option<&str>) -> i64 {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
        .unwrap_or(0)
}

fn is_foil(text: &str) -> bool {
    let text = text.to_lowercase();
    text.contains("foil") && !text.contains("non")
}

fn positive_quantity(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|q| *q > 0)
}

fn parse_tcgplayer_row(row: &CsvRow<'_>) -> Option<NewCard> {
    let name = ItemName::new(row.first_of(&["name", "simple name"])?).ok()?;
    let quantity = positive_quantity(parse_quantity(row.field("quantity")))?;

    Some(NewCard::new(
        name,
        row.first_of(&["set code", "set"]).map(str::to_string),
        row.field("card number").map(str::to_string),
        row.field("condition").map(str::to_string),
        Some(row.first_of(&["language"]).unwrap_or("English").to_string()),
        is_foil(row.field("printing").unwrap_or_default()),
        quantity,
    ))
}

fn parse_tcglive_row(row: &CsvRow<'_>) -> Option<NewCard> {
    let raw_name = row.first_of(&["product name", "title"])?;
    let name = ItemName::new(raw_name).ok()?;

    let mut quantity = parse_quantity(row.field("total quantity"));
    if quantity <= 0 {
        quantity = parse_quantity(row.field("add to quantity"));
    }
    let quantity = positive_quantity(quantity)?;

    let title_text = format!("{raw_name} {}", row.field("title").unwrap_or_default());
    let acquisition = parse_price_cents(row.first_of(&[
        "tcg marketplace price",
        "tcg low price",
        "tcg low price with shipping",
    ]));
    let market = parse_price_cents(row.field("tcg market price"));

    Some(
        NewCard::new(
            name,
            row.field("set name").map(str::to_string),
            row.field("number").map(str::to_string),
            row.field("condition").map(str::to_string),
            Some("English".to_string()),
            is_foil(&title_text),
            quantity,
        )
        .with_prices(acquisition, market),
    )
}

/// Parses a TCGplayer or TCG Live export into card payloads.
///
/// Blank rows, rows without a name and rows without a positive quantity are
/// skipped.
pub fn parse_inventory_csv<R: Read>(reader: R) -> Result<Vec<NewCard>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let header_record = reader.headers()?.clone();
    if header_record.iter().all(|h| h.trim().is_empty()) {
        return Err(ImportError::MissingHeader);
    }

    let mut headers = HashMap::new();
    for (index, name) in header_record.iter().enumerate() {
        headers.entry(normalize_header(name)).or_insert(index);
    }
    let file_type = detect_file_type(&headers)?;
    log::debug!("Detected {file_type:?} inventory layout");

    let mut cards = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row = CsvRow {
            headers: &headers,
            record: &record,
        };
        if row.is_blank() {
            continue;
        }

        let parsed = match file_type {
            InventoryFileType::TcgPlayer => parse_tcgplayer_row(&row),
            InventoryFileType::TcgLive => parse_tcglive_row(&row),
        };
        match parsed {
            Some(card) => cards.push(card),
            None => log::debug!("Skipping CSV line {:?}", record.position().map(|p| p.line())),
        }
    }

    Ok(cards)
}
