//! Column model
//!
//! Maps stable column identity (the field name) to view position, width and
//! visibility. Columns are kept in one ordered list; the view order is that
//! list filtered to visible columns, so view positions are always a
//! contiguous `0..visible_count` and a hidden column keeps its slot for
//! when it is shown again.

use crate::error::ColumnError;
use crate::introspect::FieldDescriptor;

/// Default column width, in the same units the view uses.
pub const DEFAULT_WIDTH: u16 = 75;

/// The table-side projection of a field descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    field_name: String,
    model_index: usize,
    header: String,
    tooltip: Option<String>,
    width: u16,
    visible: bool,
}

impl Column {
    /// The field name. Never changes.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Index of the field in the binding's column list.
    pub fn model_index(&self) -> usize {
        self.model_index
    }

    /// Header text.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Header tooltip.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Current width. Hidden columns keep their last width.
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Owns the columns of one table and their layout.
#[derive(Debug, Clone)]
pub struct ColumnModel {
    /// Columns indexed by model index.
    columns: Vec<Column>,
    /// Model indices of all columns, visible and hidden, in layout order.
    order: Vec<usize>,
    min_width: u16,
}

impl ColumnModel {
    /// Builds one visible column per descriptor, in descriptor order.
    pub fn build(descriptors: &[FieldDescriptor]) -> Self {
        Self::with_width(descriptors, DEFAULT_WIDTH)
    }

    /// Builds columns with the given default width.
    pub fn with_width(descriptors: &[FieldDescriptor], width: u16) -> Self {
        let columns = descriptors
            .iter()
            .enumerate()
            .map(|(model_index, d)| Column {
                field_name: d.name().to_string(),
                model_index,
                header: d.display_name().to_string(),
                tooltip: d.tooltip().map(str::to_string),
                width: width.max(1),
                visible: true,
            })
            .collect::<Vec<_>>();
        let order = (0..columns.len()).collect();

        Self {
            columns,
            order,
            min_width: 1,
        }
    }

    /// Sets the smallest width a column may take.
    pub fn with_min_width(mut self, min_width: u16) -> Self {
        self.min_width = min_width.max(1);
        for column in &mut self.columns {
            column.width = column.width.max(self.min_width);
        }
        self
    }

    /// Number of columns, visible or not.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of visible columns.
    pub fn visible_count(&self) -> usize {
        self.columns.iter().filter(|c| c.visible).count()
    }

    /// Returns the column with the given model index.
    pub fn column(&self, model_index: usize) -> Option<&Column> {
        self.columns.get(model_index)
    }

    /// Returns the column with the given field name.
    pub fn by_name(&self, name: &str) -> Result<&Column, ColumnError> {
        self.model_index(name).map(|i| &self.columns[i])
    }

    fn model_index(&self, name: &str) -> Result<usize, ColumnError> {
        self.columns
            .iter()
            .position(|c| c.field_name == name)
            .ok_or_else(|| ColumnError::not_found(name))
    }

    /// Visible columns in view order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
        self.order
            .iter()
            .map(|&i| &self.columns[i])
            .filter(|c| c.visible)
    }

    /// Hidden columns in layout order.
    pub fn hidden_columns(&self) -> impl Iterator<Item = &Column> {
        self.order
            .iter()
            .map(|&i| &self.columns[i])
            .filter(|c| !c.visible)
    }

    /// Returns the visible column at a view position.
    pub fn at_view(&self, position: usize) -> Option<&Column> {
        self.visible_columns().nth(position)
    }

    /// Returns the view position of a visible model column.
    pub fn view_position(&self, model_index: usize) -> Option<usize> {
        self.visible_columns()
            .position(|c| c.model_index == model_index)
    }

    /// Resolves a field name to its current view position.
    ///
    /// Fails with [`ColumnError::NotFound`] if no live column has that name
    /// and with [`ColumnError::Hidden`] if the column is hidden.
    pub fn resolve_position(&self, name: &str) -> Result<usize, ColumnError> {
        let model_index = self.model_index(name)?;
        self.view_position(model_index)
            .ok_or_else(|| ColumnError::hidden(name))
    }

    /// Moves a visible column to a view position.
    ///
    /// Positions past the end move the column last. Other visible columns
    /// keep their relative order; hidden columns are not counted. Moving a
    /// column to the position it already has changes nothing, hidden
    /// columns included.
    pub fn move_column(&mut self, name: &str, to: usize) -> Result<(), ColumnError> {
        let model_index = self.model_index(name)?;
        let current = self
            .view_position(model_index)
            .ok_or_else(|| ColumnError::hidden(name))?;
        if current == to.min(self.visible_count() - 1) {
            return Ok(());
        }

        self.order.retain(|&i| i != model_index);
        let slot = self
            .order
            .iter()
            .enumerate()
            .filter(|&(_, &i)| self.columns[i].visible)
            .nth(to)
            .map(|(slot, _)| slot)
            .unwrap_or(self.order.len());
        self.order.insert(slot, model_index);
        Ok(())
    }

    /// Moves the column at one view position to another.
    pub fn move_view(&mut self, from: usize, to: usize) -> Result<(), ColumnError> {
        let name = self
            .at_view(from)
            .map(|c| c.field_name.clone())
            .ok_or_else(|| ColumnError::not_found(format!("#{from}")))?;
        self.move_column(&name, to)
    }

    /// Shows or hides a column.
    ///
    /// Never reorders the remaining visible columns. A column shown again
    /// returns to its previous slot.
    pub fn set_visible(&mut self, name: &str, visible: bool) -> Result<(), ColumnError> {
        let model_index = self.model_index(name)?;
        self.columns[model_index].visible = visible;
        Ok(())
    }

    /// Sets a column's width, clamped to the minimum width.
    pub fn set_width(&mut self, name: &str, width: u16) -> Result<(), ColumnError> {
        let model_index = self.model_index(name)?;
        self.columns[model_index].width = width.max(self.min_width);
        Ok(())
    }

    /// Overrides a column's header text and tooltip. `None` keeps the
    /// current value.
    pub fn set_header(
        &mut self,
        name: &str,
        header: Option<&str>,
        tooltip: Option<&str>,
    ) -> Result<(), ColumnError> {
        let model_index = self.model_index(name)?;
        let column = &mut self.columns[model_index];
        if let Some(header) = header {
            column.header = header.to_string();
        }
        if let Some(tooltip) = tooltip {
            column.tooltip = Some(tooltip.to_string());
        }
        Ok(())
    }

    /// Maps a view position to a model index.
    pub fn to_model(&self, view: usize) -> Option<usize> {
        self.at_view(view).map(|c| c.model_index)
    }
}
