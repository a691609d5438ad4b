//! Record model for the inactive-ingredient dataset.
//!
//! Records arrive as loosely-typed JSON objects. This crate pins the known
//! keys to named fields, keeps unknown keys aside at the loading boundary, and
//! defines the read-only store, translation table and filter criteria shared
//! by the query engine and its front ends.

pub mod column;
pub mod criteria;
pub mod error;
pub mod mapping;
pub mod record;
pub mod store;
pub mod value;

pub use column::Column;
pub use criteria::FilterCriteria;
pub use error::{ModelError, Result};
pub use mapping::{FieldDescriptor, FieldLabel, FieldMapping};
pub use record::{Field, Record};
pub use store::DatasetStore;
pub use value::FieldValue;
