//! Record table binding library
//!
//! Turns any type implementing [`model::BeanRecord`] into a table: one row
//! per record, one column per registered field. Field metadata is discovered
//! once per type and cached, cells are read and written through the record's
//! own accessors, and the column layout (order, width, visibility) can be
//! saved to and restored from a named preference store.

pub mod binding;
pub mod column;
pub mod config;
pub mod error;
pub mod introspect;
pub mod layout;
pub mod model;
pub mod prefs;
pub mod render;
pub mod selection;

mod table;

pub use config::TableConfig;
pub use table::*;
