//! Record types and their field registrations

use std::fmt;
use std::sync::Arc;

use super::FieldType;
use super::Value;
use crate::error::FieldError;

/// Shared accessor closure.
pub type Getter<R> = Arc<dyn Fn(&R) -> Result<Value, FieldError> + Send + Sync>;

/// Shared mutator closure.
pub type Setter<R> = Arc<dyn Fn(&mut R, Value) -> Result<(), FieldError> + Send + Sync>;

/// Which directive list is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Fields that may be edited in a cell.
    Editable,
    /// Fields that get no column.
    Hidden,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveKind::Editable => f.write_str("editable"),
            DirectiveKind::Hidden => f.write_str("hidden"),
        }
    }
}

/// A record type that can be bound to a table.
///
/// Implementors register their fields once; the registry caches the
/// resulting descriptors per type.
///
/// # Example
///
/// ```
/// use beantable_lib::model::{BeanRecord, DirectiveKind, FieldAccess, FieldType};
///
/// struct Server {
///     id: i32,
///     name: String,
///     active: bool,
/// }
///
/// impl BeanRecord for Server {
///     fn fields() -> Vec<FieldAccess<Self>> {
///         vec![
///             FieldAccess::new("id", FieldType::INT, |s: &Server| s.id),
///             FieldAccess::new("name", FieldType::Text, |s: &Server| s.name.clone())
///                 .setter(|s, v| {
///                     s.name = v.into_string()?;
///                     Ok(())
///                 }),
///             FieldAccess::new("active", FieldType::BOOL, |s: &Server| s.active)
///                 .setter(|s, v| {
///                     s.active = v.into_bool()?;
///                     Ok(())
///                 }),
///         ]
///     }
///
///     fn static_directive(kind: DirectiveKind) -> Option<String> {
///         match kind {
///             DirectiveKind::Editable => Some("name active".into()),
///             DirectiveKind::Hidden => None,
///         }
///     }
/// }
/// ```
pub trait BeanRecord: Sized + 'static {
    /// Set to `true` when the directive lists come from
    /// [`instance_directive`](Self::instance_directive) and need a sample record.
    const INSTANCE_DIRECTIVES: bool = false;

    /// Registers the fields of this type, in column order.
    fn fields() -> Vec<FieldAccess<Self>>;

    /// Name used in diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Type-level directive: whitespace-separated field names.
    fn static_directive(_kind: DirectiveKind) -> Option<String> {
        None
    }

    /// Instance-level directive, consulted when the type-level one is absent.
    fn instance_directive(&self, _kind: DirectiveKind) -> Option<String> {
        None
    }

    /// Whether this record may currently be edited.
    ///
    /// `None` means the record has no opinion and is editable.
    fn editable(&self) -> Option<bool> {
        None
    }
}

/// Registration of one field: its name, declared type and accessors.
pub struct FieldAccess<R> {
    pub(crate) name: String,
    pub(crate) field_type: FieldType,
    pub(crate) getter: Option<Getter<R>>,
    pub(crate) setter: Option<Setter<R>>,
    pub(crate) display_name: Option<String>,
    pub(crate) tooltip: Option<String>,
}

impl<R> FieldAccess<R> {
    /// Registers a readable field with an infallible accessor.
    pub fn new<V, F>(name: impl Into<String>, field_type: FieldType, getter: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&R) -> V + Send + Sync + 'static,
    {
        Self::try_new(name, field_type, move |r| Ok(getter(r).into()))
    }

    /// Registers a readable field whose accessor may fail.
    pub fn try_new<F>(name: impl Into<String>, field_type: FieldType, getter: F) -> Self
    where
        F: Fn(&R) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            field_type,
            getter: Some(Arc::new(getter)),
            setter: None,
            display_name: None,
            tooltip: None,
        }
    }

    /// Registers a field that can only be written. It never becomes a column.
    pub fn write_only<F>(name: impl Into<String>, field_type: FieldType, setter: F) -> Self
    where
        F: Fn(&mut R, Value) -> Result<(), FieldError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            field_type,
            getter: None,
            setter: Some(Arc::new(setter)),
            display_name: None,
            tooltip: None,
        }
    }

    /// Adds a mutator.
    pub fn setter<F>(mut self, setter: F) -> Self
    where
        F: Fn(&mut R, Value) -> Result<(), FieldError> + Send + Sync + 'static,
    {
        self.setter = Some(Arc::new(setter));
        self
    }

    /// Sets the header text. Defaults to the field name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the header tooltip.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<R> fmt::Debug for FieldAccess<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccess")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("readable", &self.getter.is_some())
            .field("writable", &self.setter.is_some())
            .finish()
    }
}
