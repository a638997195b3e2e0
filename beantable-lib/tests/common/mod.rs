//! Record types shared by the integration tests.

#![allow(dead_code)]

use beantable_lib::column::ColumnModel;
use beantable_lib::introspect::DescriptorRegistry;
use beantable_lib::introspect::Directives;
use beantable_lib::model::BeanRecord;
use beantable_lib::model::FieldAccess;
use beantable_lib::model::FieldType;
use serde::Deserialize;
use serde::Serialize;

/// `{id: integer (read-only), label: text, active: boolean}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub label: String,
    pub active: bool,
}

impl Item {
    pub fn new(id: i32, label: &str, active: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            active,
        }
    }
}

impl BeanRecord for Item {
    fn fields() -> Vec<FieldAccess<Self>> {
        vec![
            FieldAccess::new("id", FieldType::INT, |i: &Item| i.id),
            FieldAccess::new("label", FieldType::Text, |i: &Item| i.label.clone()).setter(|i, v| {
                i.label = v.into_string()?;
                Ok(())
            }),
            FieldAccess::new("active", FieldType::BOOL, |i: &Item| i.active).setter(|i, v| {
                i.active = v.into_bool()?;
                Ok(())
            }),
        ]
    }
}

pub fn directives() -> Directives {
    Directives::parse("label active", "")
}

pub fn item_columns() -> ColumnModel {
    let registry = DescriptorRegistry::new();
    let schema = registry.schema::<Item>(&directives()).unwrap();
    ColumnModel::build(schema.descriptors())
}

pub fn view_names(columns: &ColumnModel) -> Vec<String> {
    columns
        .visible_columns()
        .map(|c| c.field_name().to_string())
        .collect()
}
