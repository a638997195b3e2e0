//! Column layout snapshots
//!
//! A [`LayoutSnapshot`] is the persisted `(name, width, visible)` list of a
//! table's columns. Restoring reconciles it against the live
//! [`ColumnModel`] by field name, so a snapshot written by an older version
//! of a record type still applies after fields were added or removed.

use log::debug;
use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::column::ColumnModel;
use crate::error::ColumnError;

/// Persisted state of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub name: String,
    pub width: u16,
    pub visible: bool,
}

impl ColumnLayout {
    pub fn new(name: impl Into<String>, width: u16, visible: bool) -> Self {
        Self {
            name: name.into(),
            width,
            visible,
        }
    }
}

/// Ordered column layouts. Order among visible entries is the intended
/// left-to-right position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub columns: Vec<ColumnLayout>,
}

impl LayoutSnapshot {
    pub fn new(columns: Vec<ColumnLayout>) -> Self {
        Self { columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Captures every column of `model`: visible columns in view order,
    /// then hidden columns in layout order.
    pub fn save(model: &ColumnModel) -> Self {
        let layout = |c: &Column| {
            ColumnLayout::new(c.field_name(), c.width(), c.is_visible())
        };
        let columns = model
            .visible_columns()
            .map(layout)
            .chain(model.hidden_columns().map(layout))
            .collect();
        Self { columns }
    }

    /// Applies this snapshot to `model`.
    ///
    /// Visible entries are shown and moved to the next target position in
    /// order. Hidden entries only get their width and are hidden where they
    /// stand. Entries naming a field the model does not have are skipped.
    /// Columns missing from the snapshot keep their current place. Applying
    /// the same snapshot twice gives the same layout as applying it once.
    pub fn restore(&self, model: &mut ColumnModel) {
        let mut target = 0;

        for entry in &self.columns {
            match apply_entry(model, entry, target) {
                Ok(()) => {
                    if entry.visible {
                        target += 1;
                    }
                }
                Err(e) => {
                    debug!(
                        "column '{}' is in the saved layout but not in the table: {e}",
                        entry.name
                    );
                }
            }
        }
    }
}

fn apply_entry(
    model: &mut ColumnModel,
    entry: &ColumnLayout,
    target: usize,
) -> Result<(), ColumnError> {
    if entry.width > 0 {
        model.set_width(&entry.name, entry.width)?;
    }
    if !entry.visible {
        return model.set_visible(&entry.name, false);
    }
    // Columns placed so far hold positions below `target`, and a move to the
    // position a column already has is a no-op.
    model.set_visible(&entry.name, true)?;
    model.move_column(&entry.name, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::Directives;
    use crate::introspect::discover;
    use crate::model::BeanRecord;
    use crate::model::FieldAccess;
    use crate::model::FieldType;

    struct Row;

    impl BeanRecord for Row {
        fn fields() -> Vec<FieldAccess<Self>> {
            ["id", "label", "active", "extra"]
                .into_iter()
                .map(|n| FieldAccess::new(n, FieldType::Text, |_: &Row| ""))
                .collect()
        }
    }

    fn model() -> ColumnModel {
        let schema = discover::<Row>(&Directives::new()).unwrap();
        ColumnModel::build(schema.descriptors())
    }

    fn view(model: &ColumnModel) -> Vec<&str> {
        model.visible_columns().map(|c| c.field_name()).collect()
    }

    #[test]
    fn test_save_visible_then_hidden() {
        let mut m = model();
        m.set_visible("label", false).unwrap();
        m.move_column("extra", 0).unwrap();
        m.set_width("id", 40).unwrap();

        let names: Vec<_> = LayoutSnapshot::save(&m)
            .columns
            .into_iter()
            .map(|c| (c.name, c.width, c.visible))
            .collect();
        assert_eq!(
            names,
            [
                ("extra".to_string(), 75, true),
                ("id".to_string(), 40, true),
                ("active".to_string(), 75, true),
                ("label".to_string(), 75, false),
            ]
        );
    }

    #[test]
    fn test_restore_hidden_entry_not_counted() {
        let snapshot = LayoutSnapshot::new(vec![
            ColumnLayout::new("active", 10, true),
            ColumnLayout::new("id", 20, false),
            ColumnLayout::new("extra", 30, true),
        ]);
        let mut m = model();
        snapshot.restore(&mut m);

        assert_eq!(view(&m), ["active", "extra", "label"]);
        assert_eq!(m.by_name("id").unwrap().width(), 20);
        assert!(!m.by_name("id").unwrap().is_visible());
    }

    #[test]
    fn test_restore_round_trip() {
        let mut original = model();
        original.move_column("active", 0).unwrap();
        original.set_visible("id", false).unwrap();
        original.set_width("label", 99).unwrap();
        let snapshot = LayoutSnapshot::save(&original);

        let mut fresh = model();
        snapshot.restore(&mut fresh);

        assert_eq!(view(&fresh), view(&original));
        assert_eq!(LayoutSnapshot::save(&fresh), snapshot);
    }

    #[test]
    fn test_restore_ignores_zero_width() {
        let snapshot = LayoutSnapshot::new(vec![ColumnLayout::new("id", 0, true)]);
        let mut m = model();
        snapshot.restore(&mut m);
        assert_eq!(m.by_name("id").unwrap().width(), 75);
    }
}
