//! Hidden/editable field directives

use std::collections::BTreeSet;

use log::debug;
use log::warn;

use crate::error::DirectiveError;
use crate::error::DirectiveFailure;
use crate::model::BeanRecord;
use crate::model::DirectiveKind;

/// Which fields are editable and which get no column.
///
/// Supplied explicitly at bind time, or resolved from the record type with
/// [`Directives::resolve`].
///
/// # Example
///
/// ```
/// use beantable_lib::introspect::Directives;
///
/// let directives = Directives::parse("label active", "");
/// assert!(directives.is_editable("label"));
/// assert!(!directives.is_hidden("id"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Directives {
    editable: BTreeSet<String>,
    hidden: BTreeSet<String>,
}

impl Directives {
    /// Creates empty directives: nothing hidden, nothing editable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses whitespace-separated editable and hidden field lists.
    pub fn parse(editable: &str, hidden: &str) -> Self {
        Self {
            editable: split_names(editable),
            hidden: split_names(hidden),
        }
    }

    /// Marks fields as editable.
    pub fn with_editable<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.editable.extend(names.into_iter().map(Into::into));
        self
    }

    /// Hides fields.
    pub fn with_hidden<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden.extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if the field is listed as editable.
    pub fn is_editable(&self, name: &str) -> bool {
        self.editable.contains(name)
    }

    /// Returns `true` if the field is listed as hidden.
    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden.contains(name)
    }

    /// Resolves directives from the record type.
    ///
    /// Each list is looked up on the type first and then on `sample`. A list
    /// that cannot be resolved is logged and treated as empty; resolution
    /// never fails.
    pub fn resolve<R: BeanRecord>(sample: Option<&R>) -> Self {
        let resolve = |kind| match resolve_kind::<R>(kind, sample) {
            Ok(names) => names,
            Err(e) => {
                warn!("{e}; using an empty {kind} list");
                BTreeSet::new()
            }
        };

        Self {
            editable: resolve(DirectiveKind::Editable),
            hidden: resolve(DirectiveKind::Hidden),
        }
    }
}

fn split_names(list: &str) -> BTreeSet<String> {
    list.split_whitespace().map(str::to_string).collect()
}

fn resolve_kind<R: BeanRecord>(
    kind: DirectiveKind,
    sample: Option<&R>,
) -> Result<BTreeSet<String>, DirectiveError> {
    if let Some(list) = R::static_directive(kind) {
        debug!("{} {kind} directive (static): {list}", R::type_name());
        return Ok(split_names(&list));
    }

    if !R::INSTANCE_DIRECTIVES {
        return Ok(BTreeSet::new());
    }

    let error = |reason| DirectiveError {
        type_name: R::type_name(),
        kind,
        reason,
    };

    let sample = sample.ok_or_else(|| error(DirectiveFailure::MissingSample))?;
    let list = sample
        .instance_directive(kind)
        .ok_or_else(|| error(DirectiveFailure::NotProvided))?;
    debug!("{} {kind} directive (instance): {list}", R::type_name());
    Ok(split_names(&list))
}
