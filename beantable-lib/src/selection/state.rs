//! View selection state

use std::collections::BTreeSet;

/// Selection mode for table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    None,
    /// One row at a time.
    #[default]
    Single,
    /// Any set of rows.
    Multi,
}

/// Selected view rows and, when column selection is on, view columns.
///
/// Indices are view indices; translate them with
/// [`SelectionBridge`](super::SelectionBridge) before touching records.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub mode: SelectionMode,
    rows: BTreeSet<usize>,
    columns: BTreeSet<usize>,
}

impl Selection {
    /// Create selection with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            rows: BTreeSet::new(),
            columns: BTreeSet::new(),
        }
    }

    /// Select a view row. Single mode replaces the current row.
    /// Returns true if selection changed.
    pub fn select_row(&mut self, row: usize) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.rows.len() == 1 && self.rows.contains(&row) {
                    return false;
                }
                self.rows.clear();
                self.rows.insert(row)
            }
            SelectionMode::Multi => self.rows.insert(row),
        }
    }

    /// Toggle a view row.
    pub fn toggle_row(&mut self, row: usize) -> bool {
        if self.rows.remove(&row) {
            return true;
        }
        self.select_row(row)
    }

    /// Select a view column.
    pub fn select_column(&mut self, column: usize) -> bool {
        self.columns.insert(column)
    }

    /// Check if a view row is selected.
    pub fn is_row_selected(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    /// Selected view rows, ascending.
    pub fn rows(&self) -> &BTreeSet<usize> {
        &self.rows
    }

    /// Selected view columns, ascending.
    pub fn columns(&self) -> &BTreeSet<usize> {
        &self.columns
    }

    /// The lowest selected view row.
    pub fn first_row(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.columns.clear();
    }
}
