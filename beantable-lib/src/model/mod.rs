//! Typed models

mod field_type;
mod record;
mod value;

pub use field_type::*;
pub use record::*;
pub use value::*;
