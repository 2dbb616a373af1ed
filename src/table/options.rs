//! Construction options for a table controller.

use crate::domain::types::PageSize;
use crate::table::viewport::ViewportClass;

/// Render targets a listing page provides for its table.
///
/// The table body and the pagination region are required; the filter input
/// and the master checkbox are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableAnchors {
    pub table_body: Option<String>,
    pub pagination: Option<String>,
    pub filter_input: Option<String>,
    pub master_toggle: Option<String>,
}

impl TableAnchors {
    /// Anchors named after a listing prefix, e.g. `cards-body` and
    /// `cards-pagination`. Filter input and master toggle are left unset.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            table_body: Some(format!("{prefix}-body")),
            pagination: Some(format!("{prefix}-pagination")),
            filter_input: None,
            master_toggle: None,
        }
    }

    /// Name of the first missing required anchor, if any.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.table_body.is_none() {
            Some("table body")
        } else if self.pagination.is_none() {
            Some("pagination")
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub anchors: TableAnchors,
    pub page_size_desktop: PageSize,
    pub page_size_mobile: PageSize,
}

impl TableOptions {
    /// Options with the given desktop page size; the mobile size defaults to
    /// half of it.
    pub fn new(anchors: TableAnchors, page_size_desktop: PageSize) -> Self {
        Self {
            anchors,
            page_size_desktop,
            page_size_mobile: page_size_desktop.halved(),
        }
    }

    pub fn mobile_page_size(mut self, size: PageSize) -> Self {
        self.page_size_mobile = size;
        self
    }

    pub fn filter_input(mut self, anchor: impl Into<String>) -> Self {
        self.anchors.filter_input = Some(anchor.into());
        self
    }

    pub fn master_toggle(mut self, anchor: impl Into<String>) -> Self {
        self.anchors.master_toggle = Some(anchor.into());
        self
    }

    pub fn page_size_for(&self, viewport: ViewportClass) -> PageSize {
        match viewport {
            ViewportClass::Desktop => self.page_size_desktop,
            ViewportClass::Mobile => self.page_size_mobile,
        }
    }

    pub fn has_filter_input(&self) -> bool {
        self.anchors.filter_input.is_some()
    }

    pub fn has_master_toggle(&self) -> bool {
        self.anchors.master_toggle.is_some()
    }
}
