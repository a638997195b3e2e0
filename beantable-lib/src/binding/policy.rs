//! Column and row editability

use crate::introspect::FieldDescriptor;
use crate::model::BeanRecord;

/// A column is editable when its descriptor is preferred. Discovery already
/// folded the mutator and type checks into that flag.
pub fn column_editable(descriptor: &FieldDescriptor) -> bool {
    descriptor.preferred()
}

/// A row is editable unless the record says otherwise.
pub fn row_editable<R: BeanRecord>(record: &R) -> bool {
    record.editable().unwrap_or(true)
}
