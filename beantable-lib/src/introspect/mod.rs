//! Field discovery
//!
//! Turns the fields a [`BeanRecord`] registers into ordered
//! [`FieldDescriptor`]s, applying the hidden and editable [`Directives`].
//! Results are cached per type in a [`DescriptorRegistry`].

mod directives;
mod registry;

pub use directives::*;
pub use registry::*;

use std::fmt;

use log::debug;

use crate::error::IntrospectError;
use crate::model::BeanRecord;
use crate::model::FieldType;
use crate::model::Getter;
use crate::model::Setter;

/// Discovered metadata about one displayable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    field_type: FieldType,
    has_accessor: bool,
    has_mutator: bool,
    display_name: String,
    tooltip: Option<String>,
    preferred: bool,
}

impl FieldDescriptor {
    /// The field name. Stable join key for persisted layouts.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn has_accessor(&self) -> bool {
        self.has_accessor
    }

    pub fn has_mutator(&self) -> bool {
        self.has_mutator
    }

    /// Header text.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Header tooltip.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Whether the column is editable.
    ///
    /// Only ever `true` for fields with a mutator whose type is a
    /// primitive-like scalar or text.
    pub fn preferred(&self) -> bool {
        self.preferred
    }
}

/// The accessors backing one descriptor.
pub(crate) struct Accessors<R> {
    pub getter: Getter<R>,
    pub setter: Option<Setter<R>>,
}

/// Descriptors of a record type together with their accessors.
///
/// Index `i` of [`descriptors`](Self::descriptors) is model column `i`.
pub struct Schema<R> {
    type_name: &'static str,
    descriptors: Vec<FieldDescriptor>,
    accessors: Vec<Accessors<R>>,
}

impl<R> Schema<R> {
    /// Name of the record type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Descriptors in column order.
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// `true` when every readable field is hidden.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns the descriptor of a model column.
    pub fn descriptor(&self, column: usize) -> Option<&FieldDescriptor> {
        self.descriptors.get(column)
    }

    /// Returns the model column of a field.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.name == name)
    }

    pub(crate) fn accessors(&self, column: usize) -> Option<&Accessors<R>> {
        self.accessors.get(column)
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("descriptors", &self.descriptors)
            .finish()
    }
}

/// Discovers the displayable fields of `R`.
///
/// Keeps every field with an accessor that is not hidden, in registration
/// order, and marks a field editable when it is listed editable, has a
/// mutator, and its type is a primitive-like scalar or text.
///
/// Returns [`IntrospectError::NoIntrospectableFields`] when `R` registers
/// no readable field.
pub fn discover<R: BeanRecord>(directives: &Directives) -> Result<Schema<R>, IntrospectError> {
    let type_name = R::type_name();
    let mut descriptors = Vec::new();
    let mut accessors = Vec::new();
    let mut readable = 0;

    for field in R::fields() {
        let Some(getter) = field.getter else {
            continue;
        };
        readable += 1;
        if directives.is_hidden(&field.name) {
            continue;
        }

        let has_mutator = field.setter.is_some();
        let preferred = directives.is_editable(&field.name)
            && has_mutator
            && field.field_type.is_editable_kind();

        if directives.is_editable(&field.name) && !preferred {
            debug!(
                "{type_name}.{} listed editable but is {} with mutator={has_mutator}",
                field.name, field.field_type
            );
        }

        descriptors.push(FieldDescriptor {
            display_name: field.display_name.unwrap_or_else(|| field.name.clone()),
            name: field.name,
            field_type: field.field_type,
            has_accessor: true,
            has_mutator,
            tooltip: field.tooltip,
            preferred,
        });
        accessors.push(Accessors {
            getter,
            setter: field.setter,
        });
    }

    if readable == 0 {
        return Err(IntrospectError::NoIntrospectableFields { type_name });
    }

    Ok(Schema {
        type_name,
        descriptors,
        accessors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldAccess;
    use crate::model::Primitive;
    use crate::model::Value;

    struct Item {
        id: i32,
        label: String,
        active: bool,
    }

    impl BeanRecord for Item {
        fn fields() -> Vec<FieldAccess<Self>> {
            vec![
                FieldAccess::new("id", FieldType::INT, |r: &Item| r.id),
                FieldAccess::new("label", FieldType::Text, |r: &Item| r.label.clone()).setter(
                    |r, v| {
                        r.label = v.into_string()?;
                        Ok(())
                    },
                ),
                FieldAccess::new("active", FieldType::BOOL, |r: &Item| r.active).setter(|r, v| {
                    r.active = v.into_bool()?;
                    Ok(())
                }),
                FieldAccess::new("count", FieldType::Boxed(Primitive::Int), |_: &Item| {
                    Value::Null
                })
                .setter(|_, _| Ok(())),
                FieldAccess::write_only("secret", FieldType::Text, |_, _| Ok(())),
            ]
        }
    }

    struct Empty;

    impl BeanRecord for Empty {
        fn fields() -> Vec<FieldAccess<Self>> {
            vec![FieldAccess::write_only("w", FieldType::INT, |_, _| Ok(()))]
        }
    }

    fn names(schema: &Schema<Item>) -> Vec<&str> {
        schema.descriptors().iter().map(|d| d.name()).collect()
    }

    #[test]
    fn test_discover_readable_fields_only() {
        let schema = discover::<Item>(&Directives::new()).unwrap();
        assert_eq!(names(&schema), ["id", "label", "active", "count"]);
        assert!(schema.descriptors().iter().all(|d| d.has_accessor()));
    }

    #[test]
    fn test_discover_hidden_excluded() {
        let schema = discover::<Item>(&Directives::parse("", "label count")).unwrap();
        assert_eq!(names(&schema), ["id", "active"]);
    }

    #[test]
    fn test_discover_editable_gating() {
        let directives = Directives::parse("id label active count", "");
        let schema = discover::<Item>(&directives).unwrap();
        let preferred: Vec<bool> = schema.descriptors().iter().map(|d| d.preferred()).collect();
        // id has no mutator, count is boxed
        assert_eq!(preferred, [false, true, true, false]);
        for d in schema.descriptors() {
            if d.preferred() {
                assert!(d.has_mutator() && d.field_type().is_editable_kind());
            }
        }
    }

    #[test]
    fn test_display_name_defaults_to_name() {
        let schema = discover::<Item>(&Directives::new()).unwrap();
        assert_eq!(schema.descriptor(0).unwrap().display_name(), "id");
        assert_eq!(schema.descriptor(0).unwrap().tooltip(), None);
        assert_eq!(schema.index_of("active"), Some(2));
        assert_eq!(schema.index_of("secret"), None);
    }

    #[test]
    fn test_no_readable_fields_is_fatal() {
        let err = discover::<Empty>(&Directives::new()).unwrap_err();
        assert!(matches!(err, IntrospectError::NoIntrospectableFields { .. }));
    }
}
