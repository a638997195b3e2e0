//! Integration tests for layout snapshots against a live column model.

mod common;

use beantable_lib::column::ColumnModel;
use beantable_lib::layout::ColumnLayout;
use beantable_lib::layout::LayoutSnapshot;

#[test]
fn test_restore_skips_removed_field() {
    let snapshot = LayoutSnapshot::new(vec![
        ColumnLayout::new("label", 80, true),
        ColumnLayout::new("removedField", 50, false),
    ]);
    let mut columns = common::item_columns();
    snapshot.restore(&mut columns);

    assert_eq!(common::view_names(&columns), ["label", "id", "active"]);
    let label = columns.by_name("label").unwrap();
    assert_eq!(label.width(), 80);
    assert!(label.is_visible());
    assert!(columns.by_name("removedField").unwrap_err().is_not_found());
}

#[test]
fn test_restore_is_idempotent() {
    let snapshot = LayoutSnapshot::new(vec![
        ColumnLayout::new("active", 30, true),
        ColumnLayout::new("id", 40, false),
        ColumnLayout::new("gone", 10, true),
        ColumnLayout::new("label", 90, true),
    ]);

    let mut once = common::item_columns();
    snapshot.restore(&mut once);

    let mut twice = common::item_columns();
    snapshot.restore(&mut twice);
    snapshot.restore(&mut twice);

    assert_eq!(LayoutSnapshot::save(&once), LayoutSnapshot::save(&twice));
    assert_eq!(common::view_names(&twice), ["active", "label"]);
}

#[test]
fn test_restore_hidden_entries_onto_hidden_columns() {
    let snapshot = LayoutSnapshot::new(vec![
        ColumnLayout::new("active", 75, false),
        ColumnLayout::new("id", 75, false),
    ]);
    let mut columns = common::item_columns();
    columns.set_visible("label", false).unwrap();

    snapshot.restore(&mut columns);
    let once = LayoutSnapshot::save(&columns);
    snapshot.restore(&mut columns);

    assert_eq!(LayoutSnapshot::save(&columns), once);
    assert!(common::view_names(&columns).is_empty());
}

/// Every ordered choice of three entries from the live fields plus one
/// removed field, each visible or hidden, restored onto every combination
/// of already-hidden columns.
#[test]
fn test_restore_is_idempotent_from_any_visibility() {
    const FIELDS: [&str; 3] = ["id", "label", "active"];
    const NAMES: [&str; 4] = ["id", "label", "active", "gone"];

    let mut cases = 0;
    for a in 0..NAMES.len() {
        for b in (0..NAMES.len()).filter(|&b| b != a) {
            for c in (0..NAMES.len()).filter(|&c| c != a && c != b) {
                for flags in 0..8u8 {
                    for hidden in 0..8u8 {
                        let snapshot = LayoutSnapshot::new(
                            [a, b, c]
                                .iter()
                                .enumerate()
                                .map(|(bit, &n)| {
                                    ColumnLayout::new(NAMES[n], 50, flags & (1 << bit) != 0)
                                })
                                .collect(),
                        );

                        let mut columns = common::item_columns();
                        for (bit, field) in FIELDS.iter().enumerate() {
                            if hidden & (1 << bit) != 0 {
                                columns.set_visible(field, false).unwrap();
                            }
                        }

                        snapshot.restore(&mut columns);
                        let once = LayoutSnapshot::save(&columns);
                        let once_order = full_order(&columns);
                        snapshot.restore(&mut columns);

                        assert_eq!(
                            LayoutSnapshot::save(&columns),
                            once,
                            "snapshot {snapshot:?} onto hidden mask {hidden:03b}"
                        );
                        assert_eq!(full_order(&columns), once_order);
                        cases += 1;
                    }
                }
            }
        }
    }
    assert_eq!(cases, 24 * 8 * 8);
}

/// Layout order of all columns, hidden ones included.
fn full_order(columns: &ColumnModel) -> Vec<String> {
    let mut columns = columns.clone();
    for field in ["id", "label", "active"] {
        columns.set_visible(field, true).unwrap();
    }
    common::view_names(&columns)
}

#[test]
fn test_empty_snapshot_keeps_defaults() {
    let mut columns = common::item_columns();
    LayoutSnapshot::default().restore(&mut columns);
    assert_eq!(common::view_names(&columns), ["id", "label", "active"]);
}

#[test]
fn test_hidden_column_reshown_in_place() {
    let mut columns = common::item_columns();
    columns.set_visible("label", false).unwrap();
    assert_eq!(common::view_names(&columns), ["id", "active"]);
    assert!(columns.resolve_position("label").is_err());

    columns.set_visible("label", true).unwrap();
    assert_eq!(common::view_names(&columns), ["id", "label", "active"]);
}
