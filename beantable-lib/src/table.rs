//! Table facade
//!
//! [`BeanTable`] hosts one [`TableBinding`] together with the view-side
//! state a table needs: the column layout, the row order (sort and filter)
//! and the selection. Every selection query goes through the
//! [`SelectionBridge`], so view indices never reach the records directly.

use std::fmt;
use std::fmt::Write as _;

use log::debug;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::binding::ListenerId;
use crate::binding::TableBinding;
use crate::binding::TableEvent;
use crate::column::ColumnModel;
use crate::config::TableConfig;
use crate::error::ColumnError;
use crate::error::IntrospectError;
use crate::error::PrefsError;
use crate::introspect::DescriptorRegistry;
use crate::introspect::Directives;
use crate::layout::LayoutSnapshot;
use crate::model::BeanRecord;
use crate::model::Value;
use crate::prefs::TablePrefs;
use crate::render;
use crate::selection::RowOrder;
use crate::selection::Selection;
use crate::selection::SelectionBridge;
use crate::selection::SelectionMode;
use crate::selection::SortKey;

type RowFilter<R> = Box<dyn Fn(&R) -> bool>;

/// A bound record table with its layout, row order and selection.
///
/// # Example
///
/// ```
/// use beantable_lib::BeanTable;
/// use beantable_lib::TableConfig;
/// use beantable_lib::introspect::DescriptorRegistry;
/// use beantable_lib::model::{BeanRecord, FieldAccess, FieldType};
///
/// struct Host {
///     name: String,
///     port: i32,
/// }
///
/// impl BeanRecord for Host {
///     fn fields() -> Vec<FieldAccess<Self>> {
///         vec![
///             FieldAccess::new("name", FieldType::Text, |h: &Host| h.name.clone()),
///             FieldAccess::new("port", FieldType::INT, |h: &Host| h.port),
///         ]
///     }
/// }
///
/// let registry = DescriptorRegistry::new();
/// let hosts = vec![
///     Host { name: "b".into(), port: 80 },
///     Host { name: "a".into(), port: 443 },
/// ];
/// let mut table = BeanTable::new(&registry, hosts, TableConfig::default()).unwrap();
/// table.sort_by("name", true).unwrap();
/// table.select_view_row(0);
/// assert_eq!(table.selected_record().map(|h| h.port), Some(443));
/// ```
pub struct BeanTable<R: BeanRecord> {
    binding: TableBinding<R>,
    columns: ColumnModel,
    rows: RowOrder,
    selection: Selection,
    config: TableConfig,
    filter: Option<RowFilter<R>>,
    prefs: Option<TablePrefs>,
}

impl<R: BeanRecord> BeanTable<R> {
    /// Binds `records`, resolving directives from the type or, failing that,
    /// from the first record.
    pub fn new(
        registry: &DescriptorRegistry,
        records: Vec<R>,
        config: TableConfig,
    ) -> Result<Self, IntrospectError> {
        let directives = Directives::resolve(records.first());
        Self::with_directives(registry, &directives, records, config)
    }

    /// Binds `records` with explicit directives.
    pub fn with_directives(
        registry: &DescriptorRegistry,
        directives: &Directives,
        records: Vec<R>,
        config: TableConfig,
    ) -> Result<Self, IntrospectError> {
        let binding = TableBinding::bind(registry, directives, records)?;
        Ok(Self::from_binding(binding, config))
    }

    /// Hosts an existing binding. Columns start in descriptor order.
    pub fn from_binding(binding: TableBinding<R>, config: TableConfig) -> Self {
        let columns = ColumnModel::with_width(binding.schema().descriptors(), config.default_width)
            .with_min_width(config.min_width);
        let rows = RowOrder::identity(binding.row_count());
        Self {
            binding,
            columns,
            rows,
            selection: Selection::new(config.selection_mode),
            config,
            filter: None,
            prefs: None,
        }
    }

    /// Attaches a preference node for [`save_state`](Self::save_state) and
    /// [`restore_state`](Self::restore_state).
    pub fn with_prefs(mut self, prefs: TablePrefs) -> Self {
        self.prefs = Some(prefs);
        self
    }

    pub fn binding(&self) -> &TableBinding<R> {
        &self.binding
    }

    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    /// Column layout, for moving, hiding and resizing columns.
    pub fn columns_mut(&mut self) -> &mut ColumnModel {
        &mut self.columns
    }

    pub fn row_order(&self) -> &RowOrder {
        &self.rows
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn prefs(&self) -> Option<&TablePrefs> {
        self.prefs.as_ref()
    }

    /// View/model translator over the current row order and layout.
    pub fn bridge(&self) -> SelectionBridge<'_> {
        SelectionBridge::new(&self.rows, &self.columns)
    }

    /// Number of rows in the view (after filtering).
    pub fn view_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Registers a change observer on the binding.
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) -> ListenerId {
        self.binding.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.binding.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Records
    // -------------------------------------------------------------------------

    pub fn records(&self) -> &[R] {
        self.binding.records()
    }

    pub fn add_record(&mut self, record: R) {
        self.binding.add_record(record);
        self.reorder();
    }

    pub fn add_records(&mut self, records: impl IntoIterator<Item = R>) {
        self.binding.add_records(records);
        self.reorder();
    }

    /// Replaces every record and clears the selection.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.selection.clear();
        self.binding.set_records(records);
        self.reorder();
    }

    pub fn clear_records(&mut self) {
        self.selection.clear();
        self.binding.clear_records();
        self.reorder();
    }

    /// Removes the selected records and returns them in model order.
    pub fn remove_selected(&mut self) -> Vec<R> {
        let rows = self.bridge().model_rows(&self.selection);
        self.selection.clear();
        let removed = self.binding.remove_rows(&rows);
        self.reorder();
        removed
    }

    /// Mutates a record in place and notifies observers.
    pub fn update_record(&mut self, model_row: usize, f: impl FnOnce(&mut R)) -> bool {
        self.binding.update_record(model_row, f)
    }

    /// Notifies observers that a record changed outside the table.
    pub fn record_changed(&mut self, record: &R)
    where
        R: PartialEq,
    {
        if let Some(row) = self.binding.index_of(record) {
            self.binding.record_changed(row);
        }
    }

    // -------------------------------------------------------------------------
    // Cells (view coordinates)
    // -------------------------------------------------------------------------

    /// Reads the cell at a view position. `None` if either index is out of
    /// range.
    pub fn value_at_view(&self, view_row: usize, view_column: usize) -> Option<Value> {
        let bridge = self.bridge();
        let row = bridge.to_model_row(view_row)?;
        let column = bridge.to_model_column(view_column)?;
        Some(self.binding.value_at(row, column))
    }

    /// Writes the cell at a view position if it is editable. Returns whether
    /// the write was attempted.
    pub fn set_value_at_view(&mut self, value: Value, view_row: usize, view_column: usize) -> bool {
        let bridge = self.bridge();
        let (Some(row), Some(column)) = (
            bridge.to_model_row(view_row),
            bridge.to_model_column(view_column),
        ) else {
            return false;
        };
        if !self.binding.is_cell_editable(row, column) {
            debug!(
                "{}: cell ({row}, {column}) is not editable",
                self.binding.schema().type_name()
            );
            return false;
        }
        self.binding.set_value_at(value, row, column);
        true
    }

    /// Display text of a model cell.
    pub fn format_cell(&self, model_row: usize, model_column: usize) -> String {
        render::format_value(&self.binding.value_at(model_row, model_column), &self.config)
    }

    // -------------------------------------------------------------------------
    // Sorting and filtering
    // -------------------------------------------------------------------------

    /// Sorts the view by a field. Selected records stay selected.
    pub fn sort_by(&mut self, name: &str, ascending: bool) -> Result<(), ColumnError> {
        let column = self.columns.by_name(name)?.model_index();
        let rows = self.bridge().model_rows(&self.selection);
        self.rows = RowOrder::sorted_filtered(
            &self.binding,
            Some(SortKey { column, ascending }),
            |r| self.filter.as_ref().is_none_or(|keep| keep(r)),
        );
        self.reselect(&rows);
        Ok(())
    }

    /// Returns to model order.
    pub fn clear_sort(&mut self) {
        let rows = self.bridge().model_rows(&self.selection);
        self.rows = RowOrder::sorted_filtered(&self.binding, None, |r| {
            self.filter.as_ref().is_none_or(|keep| keep(r))
        });
        self.reselect(&rows);
    }

    /// Shows only records matching `keep`.
    pub fn filter(&mut self, keep: impl Fn(&R) -> bool + 'static) {
        self.filter = Some(Box::new(keep));
        self.reorder();
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.reorder();
    }

    /// Re-derives the row order from the current records, keeping the sort,
    /// the filter and the selected records.
    pub fn refresh(&mut self) {
        self.reorder();
    }

    fn reorder(&mut self) {
        let rows = self.bridge().model_rows(&self.selection);
        self.rows = RowOrder::sorted_filtered(&self.binding, self.rows.sort_key(), |r| {
            self.filter.as_ref().is_none_or(|keep| keep(r))
        });
        self.reselect(&rows);
    }

    fn reselect(&mut self, model_rows: &[usize]) {
        let columns: Vec<usize> = self.selection.columns().iter().copied().collect();
        self.selection.clear();
        for &row in model_rows {
            if let Some(view) = self.rows.to_view(row) {
                self.selection.select_row(view);
            }
        }
        for column in columns {
            self.selection.select_column(column);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Changes the selection mode and clears the selection.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.config.selection_mode = mode;
        self.selection = Selection::new(mode);
    }

    pub fn set_column_selection(&mut self, allowed: bool) {
        self.config.column_selection = allowed;
        if !allowed {
            let rows: Vec<usize> = self.selection.rows().iter().copied().collect();
            self.selection.clear();
            for row in rows {
                self.selection.select_row(row);
            }
        }
    }

    /// Selects a view row. In single mode this replaces the selection.
    pub fn select_view_row(&mut self, view_row: usize) -> bool {
        if view_row >= self.rows.len() {
            return false;
        }
        self.selection.select_row(view_row)
    }

    pub fn toggle_view_row(&mut self, view_row: usize) -> bool {
        if view_row >= self.rows.len() {
            return false;
        }
        self.selection.toggle_row(view_row)
    }

    /// Selects a view column. Ignored unless column selection is allowed.
    pub fn select_view_column(&mut self, view_column: usize) -> bool {
        if !self.config.column_selection || view_column >= self.columns.visible_count() {
            return false;
        }
        self.selection.select_column(view_column)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The record of the first selected row.
    pub fn selected_record(&self) -> Option<&R> {
        self.bridge()
            .first_model_row(&self.selection)
            .and_then(|row| self.binding.record(row))
    }

    /// Every selected record, in view order. Empty when nothing is selected.
    pub fn selected_records(&self) -> Vec<&R> {
        self.bridge()
            .model_rows(&self.selection)
            .into_iter()
            .filter_map(|row| self.binding.record(row))
            .collect()
    }

    /// Model `(row, column)` of every selected cell.
    ///
    /// Without column selection a selected row selects all of its visible
    /// cells.
    pub fn selected_cell_indices(&self) -> Vec<(usize, usize)> {
        let bridge = self.bridge();
        if self.config.column_selection {
            return bridge.model_cells(&self.selection);
        }
        let columns: Vec<usize> = self.columns.visible_columns().map(|c| c.model_index()).collect();
        bridge
            .model_rows(&self.selection)
            .into_iter()
            .flat_map(|row| columns.iter().map(move |&column| (row, column)))
            .collect()
    }

    /// Values of every selected cell, rows outer.
    pub fn selected_cells(&self) -> Vec<Value> {
        self.selected_cell_indices()
            .into_iter()
            .map(|(row, column)| self.binding.value_at(row, column))
            .collect()
    }

    /// Resets every selected cell to its column's zero value.
    pub fn clear_selected_cells(&mut self) {
        for (row, column) in self.selected_cell_indices() {
            let Some(value_type) = self.binding.column_value_type(column) else {
                continue;
            };
            let zero = TableBinding::<R>::zero_value(value_type);
            self.binding.set_value_at(zero, row, column);
        }
    }

    /// Selects the row showing `record`. Does nothing if the record is not
    /// in the table or is filtered out.
    pub fn set_selected_record(&mut self, record: &R) -> bool
    where
        R: PartialEq,
    {
        let Some(view) = self
            .binding
            .index_of(record)
            .and_then(|row| self.rows.to_view(row))
        else {
            return false;
        };
        self.selection.clear();
        self.selection.select_row(view)
    }

    /// Replaces the selection with the rows showing `records`.
    pub fn set_selected_records<'a>(&mut self, records: impl IntoIterator<Item = &'a R>)
    where
        R: PartialEq,
    {
        self.selection.clear();
        for record in records {
            if let Some(view) = self
                .binding
                .index_of(record)
                .and_then(|row| self.rows.to_view(row))
            {
                self.selection.select_row(view);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Headers and layout
    // -------------------------------------------------------------------------

    /// Overrides a column's header text and tooltip. Unknown names are
    /// logged and ignored.
    pub fn set_property(&mut self, name: &str, display_name: Option<&str>, tooltip: Option<&str>) {
        if let Err(e) = self.columns.set_header(name, display_name, tooltip) {
            warn!("{}: {e}", self.binding.schema().type_name());
        }
    }

    pub fn layout_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::save(&self.columns)
    }

    pub fn restore_layout(&mut self, snapshot: &LayoutSnapshot) {
        snapshot.restore(&mut self.columns);
    }

    /// Restores the column layout from the attached preference node.
    pub async fn restore_state(&mut self) -> Result<(), PrefsError> {
        let Some(prefs) = &self.prefs else {
            return Ok(());
        };
        let snapshot = prefs.load_layout().await?;
        debug!(
            "{}: restoring {} column(s) from '{}'",
            self.binding.schema().type_name(),
            snapshot.columns.len(),
            prefs.node()
        );
        snapshot.restore(&mut self.columns);
        Ok(())
    }

    /// Saves the column layout to the attached preference node.
    pub async fn save_layout(&self) -> Result<(), PrefsError> {
        match &self.prefs {
            Some(prefs) => prefs.save_layout(&self.layout_snapshot()).await,
            None => Ok(()),
        }
    }

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------

    /// Renders a field/value/description table for one record.
    ///
    /// Only fields that are currently visible are listed, ordered by view
    /// position. `props` pairs a field name with its description.
    pub fn show_record(&self, model_row: usize, props: &[(&str, &str)]) -> String {
        let mut shown: Vec<(usize, &str, String, &str)> = props
            .iter()
            .filter_map(|&(name, desc)| {
                let view = self.columns.resolve_position(name).ok()?;
                let column = self.columns.to_model(view)?;
                Some((view, name, self.format_cell(model_row, column), desc))
            })
            .collect();
        shown.sort_by_key(|&(view, ..)| view);

        let name_width = text_width("field", props.iter().map(|(n, _)| *n));
        let desc_width = text_width("description", props.iter().map(|(_, d)| *d));
        let value_width = text_width("value", shown.iter().map(|(_, _, v, _)| v.as_str()));

        let mut out = String::new();
        let mut row = |name: &str, value: &str, desc: &str| {
            let _ = writeln!(
                out,
                " | {name:>name_width$} | {value:>value_width$} | {desc:<desc_width$} |"
            );
        };
        row("field", "value", "description");
        row(
            &"-".repeat(name_width),
            &"-".repeat(value_width),
            &"-".repeat(desc_width),
        );
        for (_, name, value, desc) in &shown {
            row(name, value, desc);
        }
        out
    }

    /// Lists the properties and the current column layout.
    pub fn describe(&self) -> String {
        let schema = self.binding.schema();
        let mut out = format!("{}\n", schema.type_name());
        for d in schema.descriptors() {
            let _ = writeln!(
                out,
                "  {} ({}) {} editable={}",
                d.display_name(),
                d.name(),
                d.field_type(),
                d.preferred()
            );
        }
        out.push_str("layout:\n");
        for c in &self.layout_snapshot().columns {
            let _ = writeln!(out, "  {} width={} visible={}", c.name, c.width, c.visible);
        }
        out
    }
}

fn text_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|c| c.chars().count()).fold(header.len(), usize::max)
}

impl<R: BeanRecord + DeserializeOwned> BeanTable<R> {
    /// Replaces the records with the snapshot saved in the preference node,
    /// if there is one. Returns how many records were loaded.
    pub async fn restore_records(&mut self) -> Result<usize, PrefsError> {
        let Some(prefs) = &self.prefs else {
            return Ok(0);
        };
        let Some(records) = prefs.load_records::<R>().await? else {
            return Ok(0);
        };
        let count = records.len();
        self.set_records(records);
        Ok(count)
    }
}

impl<R: BeanRecord + Serialize + Sync> BeanTable<R> {
    /// Saves the column layout and, if `save_data` is set, the records.
    ///
    /// A failure to save the records is logged and does not stop the layout
    /// from being saved.
    pub async fn save_state(&self, save_data: bool) -> Result<(), PrefsError> {
        let Some(prefs) = &self.prefs else {
            return Ok(());
        };
        if save_data
            && let Err(e) = prefs.save_records(self.binding.records()).await
        {
            warn!(
                "{}: failed to save records to '{}': {e}",
                self.binding.schema().type_name(),
                prefs.node()
            );
        }
        prefs.save_layout(&self.layout_snapshot()).await
    }
}

impl<R: BeanRecord + fmt::Debug> fmt::Debug for BeanTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanTable")
            .field("binding", &self.binding)
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("selection", &self.selection)
            .field("filtered", &self.filter.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::model::FieldAccess;
    use crate::model::FieldType;
    use crate::prefs::MemoryStore;

    #[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
    struct Pool {
        name: String,
        size: i32,
        enabled: bool,
    }

    impl BeanRecord for Pool {
        fn fields() -> Vec<FieldAccess<Self>> {
            vec![
                FieldAccess::new("name", FieldType::Text, |p: &Pool| p.name.clone())
                    .display_name("Pool"),
                FieldAccess::new("size", FieldType::INT, |p: &Pool| p.size).setter(|p, v| {
                    p.size = v.into_i32()?;
                    Ok(())
                }),
                FieldAccess::new("enabled", FieldType::BOOL, |p: &Pool| p.enabled).setter(
                    |p, v| {
                        p.enabled = v.into_bool()?;
                        Ok(())
                    },
                ),
            ]
        }

        fn static_directive(kind: crate::model::DirectiveKind) -> Option<String> {
            match kind {
                crate::model::DirectiveKind::Editable => Some("size enabled".into()),
                crate::model::DirectiveKind::Hidden => None,
            }
        }
    }

    fn pool(name: &str, size: i32) -> Pool {
        Pool {
            name: name.into(),
            size,
            enabled: true,
        }
    }

    fn table(config: TableConfig) -> BeanTable<Pool> {
        let registry = DescriptorRegistry::new();
        let pools = vec![pool("c", 3), pool("a", 1), pool("b", 2)];
        BeanTable::new(&registry, pools, config).unwrap()
    }

    fn names(records: Vec<&Pool>) -> Vec<&str> {
        records.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sort_keeps_selection() {
        let mut t = table(TableConfig::default().with_selection_mode(SelectionMode::Multi));
        t.select_view_row(0);
        t.sort_by("name", true).unwrap();

        assert_eq!(names(t.selected_records()), ["c"]);
        assert_eq!(t.selection().first_row(), Some(2));

        t.sort_by("size", false).unwrap();
        assert_eq!(t.value_at_view(0, 0), Some(Value::from("c")));
        assert!(t.sort_by("missing", true).is_err());
    }

    #[test]
    fn test_filter_and_add() {
        let mut t = table(TableConfig::default());
        t.filter(|p| p.size > 1);
        assert_eq!(t.view_row_count(), 2);

        t.add_record(pool("d", 9));
        assert_eq!(t.view_row_count(), 3);
        t.add_record(pool("e", 0));
        assert_eq!(t.view_row_count(), 3);

        t.clear_filter();
        assert_eq!(t.view_row_count(), 5);
    }

    #[test]
    fn test_remove_selected() {
        let mut t = table(TableConfig::default().with_selection_mode(SelectionMode::Multi));
        t.sort_by("name", true).unwrap();
        t.select_view_row(0);
        t.select_view_row(2);

        let removed = t.remove_selected();
        assert_eq!(removed.len(), 2);
        assert_eq!(names(t.records().iter().collect()), ["b"]);
        assert!(t.selection().is_empty());
        assert_eq!(t.view_row_count(), 1);
    }

    #[test]
    fn test_single_mode_replaces_selection() {
        let mut t = table(TableConfig::default());
        t.select_view_row(0);
        t.select_view_row(1);
        assert_eq!(names(t.selected_records()), ["a"]);
        assert!(!t.select_view_row(10));
    }

    #[test]
    fn test_toggle_and_refresh() {
        let mut t = table(TableConfig::default().with_selection_mode(SelectionMode::Multi));
        t.sort_by("size", true).unwrap();
        assert!(t.toggle_view_row(0));
        assert!(t.toggle_view_row(2));
        assert!(t.toggle_view_row(0));
        assert!(!t.toggle_view_row(9));
        assert_eq!(names(t.selected_records()), ["c"]);

        assert!(t.update_record(0, |p| p.size = 0));
        assert_eq!(t.selection().first_row(), Some(2));
        t.refresh();

        assert_eq!(t.value_at_view(0, 0), Some(Value::from("c")));
        assert_eq!(t.selection().first_row(), Some(0));
        assert_eq!(names(t.selected_records()), ["c"]);
    }

    #[test]
    fn test_disabling_column_selection_keeps_rows() {
        let mut t = table(TableConfig::default().with_column_selection(true));
        t.select_view_row(1);
        assert!(t.select_view_column(2));

        t.set_column_selection(false);

        assert!(t.selection().columns().is_empty());
        assert_eq!(t.selection().first_row(), Some(1));
        assert!(!t.select_view_column(0));
        assert_eq!(t.selected_cell_indices().len(), 3);
    }

    #[test]
    fn test_set_selected_records() {
        let mut t = table(TableConfig::default().with_selection_mode(SelectionMode::Multi));
        t.sort_by("size", true).unwrap();
        let wanted = [pool("b", 2), pool("c", 3), pool("zz", 0)];
        t.set_selected_records(wanted.iter());

        assert_eq!(t.selection().rows().iter().copied().collect::<Vec<_>>(), [1, 2]);
        assert!(t.set_selected_record(&pool("a", 1)));
        assert_eq!(t.selection().first_row(), Some(0));
        assert!(!t.set_selected_record(&pool("zz", 0)));
    }

    #[test]
    fn test_clear_selected_cells_writes_zero_values() {
        let mut t = table(TableConfig::default().with_column_selection(true));
        t.select_view_row(0);
        t.select_view_column(0);
        t.select_view_column(1);
        t.select_view_column(2);

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        t.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        t.clear_selected_cells();

        assert_eq!(t.records()[0], Pool { name: "c".into(), size: 0, enabled: false });
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_selected_cells_without_column_selection() {
        let mut t = table(TableConfig::default());
        t.columns_mut().set_visible("enabled", false).unwrap();
        t.select_view_row(1);
        assert!(!t.select_view_column(0));

        assert_eq!(t.selected_cells(), [Value::from("a"), Value::Int(1)]);
    }

    #[test]
    fn test_set_value_at_view_respects_editability() {
        let mut t = table(TableConfig::default());
        t.columns_mut().move_column("size", 0).unwrap();

        assert!(t.set_value_at_view(Value::Int(7), 0, 0));
        assert_eq!(t.records()[0].size, 7);
        assert!(!t.set_value_at_view(Value::from("x"), 0, 1));
        assert!(!t.set_value_at_view(Value::Int(1), 9, 0));
    }

    #[test]
    fn test_set_property_updates_header() {
        let mut t = table(TableConfig::default());
        t.set_property("size", Some("Size"), Some("connections"));
        t.set_property("nope", Some("x"), None);

        let column = t.columns().by_name("size").unwrap();
        assert_eq!(column.header(), "Size");
        assert_eq!(column.tooltip(), Some("connections"));
        assert_eq!(t.columns().by_name("name").unwrap().header(), "Pool");
    }

    #[test]
    fn test_show_record() {
        let mut t = table(TableConfig::default());
        t.columns_mut().move_column("size", 0).unwrap();
        t.columns_mut().set_visible("enabled", false).unwrap();

        let notes = [("name", "pool name"), ("size", "members"), ("enabled", "on")];
        let out = t.show_record(1, &notes);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " |   field | value | description |");
        assert_eq!(lines[2], " |    size |     1 | members     |");
        assert_eq!(lines[3], " |    name |     a | pool name   |");
    }

    #[test]
    fn test_describe_lists_properties() {
        let t = table(TableConfig::default());
        let out = t.describe();
        assert!(out.contains("Pool (name) Text editable=false"));
        assert!(out.contains("size (size) Int editable=true"));
        assert!(out.contains("enabled width=75 visible=true"));
    }

    #[tokio::test]
    async fn test_save_and_restore_state() {
        let prefs = TablePrefs::new(MemoryStore::new(), "pools");

        let mut first = table(TableConfig::default()).with_prefs(prefs.clone());
        first.columns_mut().move_column("enabled", 0).unwrap();
        first.columns_mut().set_width("name", 120).unwrap();
        first.save_state(true).await.unwrap();

        let registry = DescriptorRegistry::new();
        let mut second = BeanTable::<Pool>::new(&registry, Vec::new(), TableConfig::default())
            .unwrap()
            .with_prefs(prefs);
        second.restore_state().await.unwrap();
        assert_eq!(second.restore_records().await.unwrap(), 3);

        assert_eq!(second.layout_snapshot(), first.layout_snapshot());
        assert_eq!(second.records(), first.records());
    }

    #[tokio::test]
    async fn test_state_without_prefs_is_noop() {
        let mut t = table(TableConfig::default());
        t.save_state(true).await.unwrap();
        t.restore_state().await.unwrap();
        assert_eq!(t.restore_records().await.unwrap(), 0);
    }
}
