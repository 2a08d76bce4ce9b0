//! Core contracts for datamock.
//!
//! This crate defines the field spec model, the ordered schema with its
//! loop/rest partitioning, and the validation rules applied once at load
//! time. Value generation and expansion live in `datamock-generate`.

pub mod error;
pub mod field;
pub mod schema;
pub mod validation;

pub use error::{Result, SchemaError};
pub use field::{DATE_FORMAT, FieldKind, FieldSpec, Literal};
pub use schema::{Field, LOOP_DIMENSIONS, Partitioned, Schema};
pub use validation::{validate_loop_field, validate_rest_field};
