//! Row/column data source over a live record collection
//!
//! [`TableBinding`] owns the records and mediates every cell read and write
//! through the accessors registered by the record type. Read failures
//! surface as [`Value::Unavailable`]; write failures are logged and the
//! cell-changed notification is still sent, so the view never falls out of
//! step with what the user typed.

mod events;
pub mod policy;

pub use events::*;

use std::sync::Arc;

use log::debug;
use log::warn;

use crate::error::CellError;
use crate::error::IntrospectError;
use crate::introspect::DescriptorRegistry;
use crate::introspect::Directives;
use crate::introspect::FieldDescriptor;
use crate::introspect::Schema;
use crate::model::BeanRecord;
use crate::model::Value;
use crate::model::ValueType;

/// Binds a record collection to table rows and a schema to table columns.
///
/// Row `i` is `records[i]`; column `j` is descriptor `j` of the schema,
/// independent of visibility or view order.
#[derive(Debug)]
pub struct TableBinding<R: BeanRecord> {
    schema: Arc<Schema<R>>,
    records: Vec<R>,
    listeners: Listeners,
}

impl<R: BeanRecord> TableBinding<R> {
    /// Creates a binding over an already discovered schema.
    pub fn new(schema: Arc<Schema<R>>, records: Vec<R>) -> Self {
        Self {
            schema,
            records,
            listeners: Listeners::default(),
        }
    }

    /// Discovers (or reuses) the schema of `R` and binds `records`.
    pub fn bind(
        registry: &DescriptorRegistry,
        directives: &Directives,
        records: Vec<R>,
    ) -> Result<Self, IntrospectError> {
        let schema = registry.schema::<R>(directives)?;
        Ok(Self::new(schema, records))
    }

    /// The schema backing the columns.
    pub fn schema(&self) -> &Arc<Schema<R>> {
        &self.schema
    }

    /// Returns the descriptor of a model column.
    pub fn descriptor(&self, column: usize) -> Option<&FieldDescriptor> {
        self.schema.descriptor(column)
    }

    // -------------------------------------------------------------------------
    // Shape
    // -------------------------------------------------------------------------

    /// Number of records.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Number of registered columns, visible or not.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Header text of a model column.
    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.descriptor(column).map(|d| d.display_name())
    }

    /// Declared type of a column, widened to its object equivalent.
    pub fn column_value_type(&self, column: usize) -> Option<ValueType> {
        self.descriptor(column).map(|d| d.field_type().widen())
    }

    /// Canonical zero for a column type, used to bulk-clear cells.
    pub fn zero_value(value_type: ValueType) -> Value {
        value_type.zero_value()
    }

    // -------------------------------------------------------------------------
    // Records
    // -------------------------------------------------------------------------

    /// All records in row order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the record of a row.
    pub fn record(&self, row: usize) -> Option<&R> {
        self.records.get(row)
    }

    /// Returns the row of the first record equal to `record`.
    pub fn index_of(&self, record: &R) -> Option<usize>
    where
        R: PartialEq,
    {
        self.records.iter().position(|r| r == record)
    }

    /// Appends one record.
    pub fn add_record(&mut self, record: R) {
        self.records.push(record);
        let row = self.records.len() - 1;
        self.fire(TableEvent::RowsInserted(row..=row));
    }

    /// Appends several records with a single notification.
    pub fn add_records(&mut self, records: impl IntoIterator<Item = R>) {
        let first = self.records.len();
        self.records.extend(records);
        if self.records.len() > first {
            let last = self.records.len() - 1;
            self.fire(TableEvent::RowsInserted(first..=last));
        }
    }

    /// Replaces every record atomically.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.fire(TableEvent::DataChanged);
    }

    /// Removes every record.
    pub fn clear_records(&mut self) {
        self.set_records(Vec::new());
    }

    /// Removes the given rows and returns the removed records in row order.
    ///
    /// Emits one deletion per contiguous run, highest rows first, so each
    /// range is valid when it is delivered.
    pub fn remove_rows(&mut self, rows: &[usize]) -> Vec<R> {
        let mut rows: Vec<usize> = rows
            .iter()
            .copied()
            .filter(|&r| r < self.records.len())
            .collect();
        rows.sort_unstable();
        rows.dedup();

        let mut removed = Vec::with_capacity(rows.len());
        let mut runs: Vec<(usize, usize)> = Vec::new();
        for &row in &rows {
            match runs.last_mut() {
                Some((_, end)) if *end + 1 == row => *end = row,
                _ => runs.push((row, row)),
            }
        }

        for (start, end) in runs.into_iter().rev() {
            removed.extend(self.records.drain(start..=end).rev());
            self.fire(TableEvent::RowsDeleted(start..=end));
        }

        removed.reverse();
        removed
    }

    /// Applies `f` to a record and announces the row as updated.
    pub fn update_record(&mut self, row: usize, f: impl FnOnce(&mut R)) -> bool {
        let Some(record) = self.records.get_mut(row) else {
            return false;
        };
        f(record);
        self.fire(TableEvent::RowsUpdated(row..=row));
        true
    }

    /// Announces that a record changed outside the binding.
    pub fn record_changed(&mut self, row: usize) {
        if row < self.records.len() {
            self.fire(TableEvent::RowsUpdated(row..=row));
        }
    }

    /// Takes the records out of the binding.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    // -------------------------------------------------------------------------
    // Cells
    // -------------------------------------------------------------------------

    fn field_name(&self, column: usize) -> String {
        self.descriptor(column)
            .map(|d| d.name().to_string())
            .unwrap_or_default()
    }

    fn check(&self, row: usize, column: usize) -> Result<(), CellError> {
        if row >= self.records.len() {
            return Err(CellError::RowOutOfRange {
                row,
                len: self.records.len(),
            });
        }
        if column >= self.schema.len() {
            return Err(CellError::ColumnOutOfRange {
                column,
                len: self.schema.len(),
            });
        }
        Ok(())
    }

    /// Reads a cell, reporting accessor failures.
    pub fn try_value_at(&self, row: usize, column: usize) -> Result<Value, CellError> {
        self.check(row, column)?;
        let accessors = self.schema.accessors(column).ok_or(CellError::ColumnOutOfRange {
            column,
            len: self.schema.len(),
        })?;

        (accessors.getter)(&self.records[row]).map_err(|source| CellError::AccessorInvocation {
            field: self.field_name(column),
            row,
            source,
        })
    }

    /// Reads a cell. Never fails: a failed read yields [`Value::Unavailable`].
    pub fn value_at(&self, row: usize, column: usize) -> Value {
        match self.try_value_at(row, column) {
            Ok(value) => value,
            Err(e) => {
                warn!("{}: {e}", self.schema.type_name());
                Value::Unavailable
            }
        }
    }

    /// Writes a cell, reporting mutator failures.
    ///
    /// Writing a column without a mutator does nothing. Does not notify.
    pub fn try_set_value_at(
        &mut self,
        value: Value,
        row: usize,
        column: usize,
    ) -> Result<bool, CellError> {
        self.check(row, column)?;
        let Some(setter) = self
            .schema
            .accessors(column)
            .and_then(|a| a.setter.clone())
        else {
            return Ok(false);
        };

        setter(&mut self.records[row], value).map_err(|source| CellError::MutatorInvocation {
            field: self.field_name(column),
            row,
            source,
        })?;
        Ok(true)
    }

    /// Writes a cell and notifies observers.
    ///
    /// A column without a mutator is left alone. Otherwise the mutator runs
    /// and the cell-changed notification is sent even if it failed; the
    /// failure is only logged.
    pub fn set_value_at(&mut self, value: Value, row: usize, column: usize) {
        match self.try_set_value_at(value, row, column) {
            Ok(true) => {}
            Ok(false) => {
                debug!(
                    "{}: column {column} has no mutator, ignoring write",
                    self.schema.type_name()
                );
                return;
            }
            Err(e @ CellError::MutatorInvocation { .. }) => {
                warn!("{}: {e}", self.schema.type_name());
            }
            Err(e) => {
                warn!("{}: {e}", self.schema.type_name());
                return;
            }
        }
        self.fire(TableEvent::CellUpdated { row, column });
    }

    // -------------------------------------------------------------------------
    // Editability
    // -------------------------------------------------------------------------

    /// `true` if the column is editable and the row allows editing.
    pub fn is_cell_editable(&self, row: usize, column: usize) -> bool {
        self.descriptor(column).is_some_and(policy::column_editable) && self.is_row_editable(row)
    }

    /// `true` unless the record reports itself read-only.
    pub fn is_row_editable(&self, row: usize) -> bool {
        self.records.get(row).is_some_and(policy::row_editable)
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Registers a change observer.
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Removes a change observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn fire(&mut self, event: TableEvent) {
        self.listeners.fire(&event);
    }
}
