//! Row-level selection checkboxes.

use crate::domain::row::Row;
use crate::domain::types::RowId;

/// Checked state of every row-level checkbox, aligned with the row set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    checked: Vec<bool>,
}

impl Selection {
    pub fn new(rows: usize) -> Self {
        Self {
            checked: vec![false; rows],
        }
    }

    /// Checks exactly the rows that are currently visible; every hidden row
    /// is unchecked regardless of its previous state.
    pub fn check_visible(&mut self, rows: &[Row]) {
        for (checked, row) in self.checked.iter_mut().zip(rows) {
            *checked = row.is_visible();
        }
    }

    /// Unchecks every row, visible or not.
    pub fn clear(&mut self) {
        self.checked.fill(false);
    }

    /// Sets one checkbox. Returns `false` if `index` is out of range.
    pub fn set(&mut self, index: usize, checked: bool) -> bool {
        match self.checked.get_mut(index) {
            Some(slot) => {
                *slot = checked;
                true
            }
            None => false,
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Ids of the checked rows, in row order.
    pub fn selected(&self, rows: &[Row]) -> Vec<RowId> {
        rows.iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(row, _)| row.id())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.checked.iter().filter(|checked| **checked).count()
    }
}
