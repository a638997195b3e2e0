//! View/model index translation
//!
//! The view sorts and filters rows and lets the user reorder columns; the
//! binding only knows model indices. Everything that turns a selection into
//! records goes through [`SelectionBridge`].

mod row_order;
mod state;

pub use row_order::*;
pub use state::*;

use crate::column::ColumnModel;

/// Translates between view and model coordinates.
///
/// Every lookup returns `None` for an index that is out of range, including
/// one left stale by a structural change, rather than a wrong row.
#[derive(Debug, Clone, Copy)]
pub struct SelectionBridge<'a> {
    rows: &'a RowOrder,
    columns: &'a ColumnModel,
}

impl<'a> SelectionBridge<'a> {
    pub fn new(rows: &'a RowOrder, columns: &'a ColumnModel) -> Self {
        Self { rows, columns }
    }

    pub fn to_model_row(&self, view_row: usize) -> Option<usize> {
        self.rows.to_model(view_row)
    }

    pub fn to_model_column(&self, view_column: usize) -> Option<usize> {
        self.columns.to_model(view_column)
    }

    pub fn to_view_row(&self, model_row: usize) -> Option<usize> {
        self.rows.to_view(model_row)
    }

    pub fn to_view_column(&self, model_column: usize) -> Option<usize> {
        self.columns.view_position(model_column)
    }

    /// Distinct model rows of the selection, in view order. Empty when
    /// nothing is selected.
    pub fn model_rows(&self, selection: &Selection) -> Vec<usize> {
        selection
            .rows()
            .iter()
            .filter_map(|&view| self.to_model_row(view))
            .collect()
    }

    /// Distinct model columns of the selection, in view order.
    pub fn model_columns(&self, selection: &Selection) -> Vec<usize> {
        selection
            .columns()
            .iter()
            .filter_map(|&view| self.to_model_column(view))
            .collect()
    }

    /// Model row of the first selected view row.
    pub fn first_model_row(&self, selection: &Selection) -> Option<usize> {
        selection
            .first_row()
            .and_then(|view| self.to_model_row(view))
    }

    /// Model `(row, column)` pairs of every selected cell, rows outer.
    pub fn model_cells(&self, selection: &Selection) -> Vec<(usize, usize)> {
        let columns = self.model_columns(selection);
        self.model_rows(selection)
            .into_iter()
            .flat_map(|row| columns.iter().map(move |&column| (row, column)))
            .collect()
    }
}
