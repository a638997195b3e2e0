//! Introspection error types

use crate::model::DirectiveKind;

/// Fatal discovery errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntrospectError {
    /// The record type registers no readable field, so no table can be built.
    #[error("type '{type_name}' has no introspectable fields")]
    NoIntrospectableFields { type_name: &'static str },
}

/// Why a directive list could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveFailure {
    /// Neither the type nor the instance provides the list.
    NotProvided,
    /// The list is instance-level but no sample record was supplied.
    MissingSample,
}

/// A hidden/editable directive could not be resolved.
///
/// Always recovered: discovery falls back to an empty directive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot resolve {kind} directive for '{type_name}': {reason:?}")]
pub struct DirectiveError {
    pub type_name: &'static str,
    pub kind: DirectiveKind,
    pub reason: DirectiveFailure,
}
