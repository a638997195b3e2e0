//! Integration tests for saving and restoring table state.

mod common;

use std::sync::Arc;

use beantable_lib::BeanTable;
use beantable_lib::TableConfig;
use beantable_lib::introspect::DescriptorRegistry;
use beantable_lib::layout::ColumnLayout;
use beantable_lib::layout::LayoutSnapshot;
use beantable_lib::prefs::MemoryStore;
use beantable_lib::prefs::PrefsStore;
use beantable_lib::prefs::SqliteStore;
use beantable_lib::prefs::TablePrefs;

use common::Item;

fn items() -> Vec<Item> {
    vec![Item::new(1, "a", true), Item::new(2, "b", false)]
}

fn table(registry: &DescriptorRegistry, records: Vec<Item>, prefs: TablePrefs) -> BeanTable<Item> {
    BeanTable::with_directives(registry, &common::directives(), records, TableConfig::default())
        .unwrap()
        .with_prefs(prefs)
}

#[tokio::test]
async fn test_layout_survives_restart() {
    let store: Arc<dyn PrefsStore> = Arc::new(MemoryStore::new());
    let registry = DescriptorRegistry::new();

    let mut first = table(&registry, items(), TablePrefs::shared(Arc::clone(&store), "items"));
    first.columns_mut().move_column("active", 0).unwrap();
    first.columns_mut().set_visible("id", false).unwrap();
    first.save_state(false).await.unwrap();

    let mut second = table(&registry, items(), TablePrefs::shared(store, "items"));
    second.restore_state().await.unwrap();
    assert_eq!(common::view_names(second.columns()), ["active", "label"]);
    assert_eq!(second.restore_records().await.unwrap(), 0);
    assert_eq!(second.records(), items());
}

#[tokio::test]
async fn test_stale_saved_layout() {
    let prefs = TablePrefs::new(MemoryStore::new(), "items");
    prefs
        .save_layout(&LayoutSnapshot::new(vec![
            ColumnLayout::new("label", 80, true),
            ColumnLayout::new("removedField", 50, false),
        ]))
        .await
        .unwrap();

    let registry = DescriptorRegistry::new();
    let mut t = table(&registry, items(), prefs);
    t.restore_state().await.unwrap();

    assert_eq!(common::view_names(t.columns()), ["label", "id", "active"]);
}

#[tokio::test]
async fn test_sqlite_store_round_trip() {
    let path = std::env::temp_dir().join(format!("beantable-prefs-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let registry = DescriptorRegistry::new();
    {
        let store: Arc<dyn PrefsStore> = Arc::new(SqliteStore::open(&path).await.unwrap());
        let mut t = table(&registry, items(), TablePrefs::shared(Arc::clone(&store), "items"));
        t.columns_mut().set_width("label", 140).unwrap();
        t.save_state(true).await.unwrap();

        let other = TablePrefs::shared(store, "other");
        other.save_layout(&LayoutSnapshot::default()).await.unwrap();
    }

    let store = Arc::new(SqliteStore::open(&path).await.unwrap());
    assert_eq!(store.nodes().await.unwrap(), ["items", "other"]);

    let prefs = TablePrefs::shared(store.clone(), "items");
    assert_eq!(prefs.saved().await.unwrap(), ["beanList", "propertyCol"]);
    let mut t = table(&registry, Vec::new(), prefs.clone());
    t.restore_state().await.unwrap();
    assert_eq!(t.restore_records().await.unwrap(), 2);

    assert_eq!(t.columns().by_name("label").unwrap().width(), 140);
    assert_eq!(t.records(), items());

    prefs.clear().await.unwrap();
    assert_eq!(store.nodes().await.unwrap(), ["other"]);
    assert!(prefs.load_layout().await.unwrap().is_empty());

    let _ = std::fs::remove_file(&path);
}
