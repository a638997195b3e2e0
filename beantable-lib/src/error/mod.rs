//! Error types

mod cell;
mod column;
mod field;
mod introspect;
mod prefs;

pub use cell::*;
pub use column::*;
pub use field::*;
pub use introspect::*;
pub use prefs::*;
