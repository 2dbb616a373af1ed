use serde::Serialize;

use crate::domain::types::RowId;
use crate::pagination::PaginationView;
use crate::table::viewport::ViewportClass;

/// Read-only result of the latest render of a table controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Rows on the current page, in listing order.
    pub visible_rows: Vec<RowId>,
    pub pagination: PaginationView,
    /// 1-based.
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub viewport: ViewportClass,
    /// Normalized filter term; empty when no filter is active.
    pub search_term: String,
    pub filtered_count: usize,
    pub total_count: usize,
    pub master_checked: bool,
}

impl TableView {
    /// View of a listing built without any rows.
    pub fn empty(page_size: usize) -> Self {
        Self {
            visible_rows: Vec::new(),
            pagination: PaginationView::Empty,
            current_page: 1,
            total_pages: 1,
            page_size,
            viewport: ViewportClass::default(),
            search_term: String::new(),
            filtered_count: 0,
            total_count: 0,
            master_checked: false,
        }
    }
}

/// One row as a template shows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: RowId,
    pub label: String,
    pub checked: bool,
}

/// Data required to render one listing.
#[derive(Clone, Debug, Serialize)]
pub struct ListingPageData<'a> {
    pub title: &'static str,
    /// Prefix of the listing's anchors, e.g. `cards`.
    pub anchor: &'static str,
    pub has_filter_input: bool,
    pub has_master_toggle: bool,
    pub rows: Vec<RowView>,
    pub view: &'a TableView,
}
