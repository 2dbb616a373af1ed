//! Filterable, paginated listing with visibility-scoped selection.
//!
//! A [`TableController`] owns one listing's rows, its filter term and its
//! current page. Every trigger (filter change, page click, viewport change,
//! master checkbox) runs to completion and leaves a fresh [`TableView`]
//! behind. Nothing here reports errors: a listing that cannot be mounted is
//! simply not activated, and an empty listing is a terminal state.

use std::collections::HashMap;

use crate::domain::row::Row;
use crate::domain::types::{RowId, SearchTerm};
use crate::dto::table::TableView;
use crate::pagination::{PageToken, PaginationView, total_pages};
use crate::table::options::TableOptions;
use crate::table::selection::Selection;
use crate::table::viewport::ViewportClassifier;

pub struct TableController<C> {
    options: TableOptions,
    classifier: C,
    rows: Vec<Row>,
    /// Position of each row id in `rows`; the first row wins for duplicates.
    positions: HashMap<RowId, usize>,
    /// Indices into `rows` matching the current term, in row order.
    filtered: Vec<usize>,
    term: SearchTerm,
    current_page: usize,
    selection: Selection,
    view: TableView,
}

impl<C: ViewportClassifier> TableController<C> {
    /// Activates a controller over `rows`.
    ///
    /// Returns `None` when a required anchor is missing. With no rows the
    /// controller shows the empty marker and ignores every later trigger.
    pub fn mount(options: TableOptions, rows: Vec<Row>, classifier: C) -> Option<Self> {
        if let Some(missing) = options.anchors.missing_required() {
            log::warn!("Table not activated: {missing} anchor is missing");
            return None;
        }

        let empty_view = TableView::empty(options.page_size_desktop.get());
        let mut positions = HashMap::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            positions.entry(row.id()).or_insert(index);
        }
        let mut controller = Self {
            positions,
            filtered: (0..rows.len()).collect(),
            selection: Selection::new(rows.len()),
            options,
            classifier,
            rows,
            term: SearchTerm::default(),
            current_page: 1,
            view: empty_view,
        };

        if controller.rows.is_empty() {
            log::debug!("Table mounted without rows");
            return Some(controller);
        }

        controller.render();
        Some(controller)
    }

    /// Recomputes the filtered rows for `raw` and returns to the first page.
    ///
    /// Each call rescans every row, so the result depends only on `raw`.
    pub fn apply_filter(&mut self, raw: &str) -> &TableView {
        if self.rows.is_empty() {
            return &self.view;
        }
        if !self.options.has_filter_input() {
            log::debug!("Ignoring filter on a table without filter input");
            return &self.view;
        }

        self.term = SearchTerm::new(raw);
        self.filtered = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.term.matches(row.search_blob()))
            .map(|(index, _)| index)
            .collect();
        self.current_page = 1;

        log::debug!(
            "Filter `{}` matched {} of {} rows",
            self.term,
            self.filtered.len(),
            self.rows.len()
        );

        self.render()
    }

    /// Moves to `page`. Out-of-range pages and the current page are no-ops.
    pub fn set_page(&mut self, page: usize) -> &TableView {
        if self.rows.is_empty()
            || page == 0
            || page == self.current_page
            || page > self.view.total_pages
        {
            return &self.view;
        }

        self.current_page = page;
        self.render()
    }

    /// Handles a click on a page-bar control.
    pub fn activate(&mut self, token: PageToken) -> &TableView {
        match token {
            PageToken::Prev { disabled: false } => {
                self.set_page(self.current_page.saturating_sub(1))
            }
            PageToken::Next { disabled: false } => self.set_page(self.current_page + 1),
            PageToken::Page { number } => self.set_page(number),
            PageToken::Prev { disabled: true }
            | PageToken::Next { disabled: true }
            | PageToken::Ellipsis => &self.view,
        }
    }

    /// Re-renders after the viewport may have changed class.
    ///
    /// The current page is clamped to the new page count but otherwise kept.
    pub fn on_viewport_change(&mut self) -> &TableView {
        if self.rows.is_empty() {
            return &self.view;
        }
        self.render()
    }

    /// Applies the master checkbox.
    ///
    /// Checking selects exactly the rows on the current page and unchecks
    /// every hidden row; unchecking clears every row.
    pub fn toggle_master(&mut self, checked: bool) -> &TableView {
        if self.rows.is_empty() {
            return &self.view;
        }
        if !self.options.has_master_toggle() {
            log::debug!("Ignoring master toggle on a table without one");
            return &self.view;
        }

        if checked {
            self.selection.check_visible(&self.rows);
        } else {
            self.selection.clear();
        }
        self.view.master_checked = checked;

        log::debug!("Master selection {checked}: {} rows selected", self.selection.count());
        &self.view
    }

    /// Sets one row-level checkbox. Returns `false` for an unknown row.
    pub fn set_row_selected(&mut self, id: RowId, checked: bool) -> bool {
        match self.positions.get(&id) {
            Some(&index) => self.selection.set(index, checked),
            None => false,
        }
    }

    pub fn is_row_selected(&self, id: RowId) -> bool {
        self.positions
            .get(&id)
            .is_some_and(|&index| self.selection.is_checked(index))
    }

    /// Ids of every checked row, in listing order.
    pub fn selected_rows(&self) -> Vec<RowId> {
        self.selection.selected(&self.rows)
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn filtered_rows(&self) -> impl Iterator<Item = &Row> {
        self.filtered.iter().map(|&index| &self.rows[index])
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_visible())
    }

    pub fn search_term(&self) -> &SearchTerm {
        &self.term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.view.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn render(&mut self) -> &TableView {
        let viewport = self.classifier.classify();
        let page_size = self.options.page_size_for(viewport).get();
        let total_pages = total_pages(self.filtered.len(), page_size);
        self.current_page = self.current_page.clamp(1, total_pages);

        let start = (self.current_page - 1) * page_size;
        let end = (start + page_size).min(self.filtered.len());
        let slice = &self.filtered[start.min(end)..end];

        for row in &mut self.rows {
            row.set_visible(false);
        }
        for &index in slice {
            self.rows[index].set_visible(true);
        }

        let pagination = if self.filtered.is_empty() {
            PaginationView::NoMatches
        } else {
            PaginationView::controls(self.current_page, total_pages)
        };

        self.view = TableView {
            visible_rows: slice.iter().map(|&index| self.rows[index].id()).collect(),
            pagination,
            current_page: self.current_page,
            total_pages,
            page_size,
            viewport,
            search_term: self.term.to_string(),
            filtered_count: self.filtered.len(),
            total_count: self.rows.len(),
            master_checked: false,
        };

        log::debug!(
            "Rendered page {}/{} ({} rows, {:?})",
            self.current_page,
            total_pages,
            self.view.visible_rows.len(),
            viewport
        );

        &self.view
    }
}
