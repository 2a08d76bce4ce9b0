//! Record generation engine for datamock.
//!
//! Consumes a validated [`datamock_core::Schema`] and materializes the
//! Cartesian product of its loop fields, computing the rest fields
//! independently for every record.

pub mod engine;
pub mod expand;
pub mod generator;
pub mod record;
pub mod values;

pub use engine::generate;
pub use expand::{LoopSequence, expand};
pub use generator::{compute_rest_value, resolve_loop_sequence, rest_field_produces_value};
pub use record::{Record, RecordCollection};
pub use values::{FieldValue, TIMESTAMP_FORMAT};
