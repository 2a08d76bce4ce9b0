use std::time::Instant;

use rand::RngCore;
use tracing::{info, warn};

use datamock_core::{Result, Schema};

use crate::expand::{LoopSequence, expand};
use crate::generator::{resolve_loop_sequence, rest_field_produces_value};
use crate::record::RecordCollection;

/// Run the full generation pipeline over a validated schema.
///
/// Partitions the schema, resolves the loop-field sequences, then expands
/// the Cartesian product with per-record rest values. Single-threaded and
/// synchronous: returns the complete collection or the first error, never
/// partial output.
pub fn generate(schema: &Schema, rng: &mut dyn RngCore) -> Result<RecordCollection> {
    let start = Instant::now();
    let parts = schema.partition()?;

    for field in &parts.ignored {
        warn!(
            field = %field.name,
            loop_order = field.spec.loop_order.unwrap_or(0),
            "loop field beyond the third dimension is ignored"
        );
    }
    for field in &parts.rest {
        if !rest_field_produces_value(&field.spec) {
            warn!(
                field = %field.name,
                kind = %field.spec.kind,
                "rest field produces no value, key will be omitted"
            );
        }
    }

    let mut sequences = Vec::with_capacity(parts.loops.len());
    for field in &parts.loops {
        let values = resolve_loop_sequence(field, rng)?;
        info!(field = %field.name, values = values.len(), "loop sequence resolved");
        sequences.push(LoopSequence {
            name: field.name.clone(),
            values,
        });
    }

    let expected: usize = sequences.iter().map(|seq| seq.values.len()).product();
    info!(
        dimensions = sequences.len(),
        expected_records = expected,
        "expansion started"
    );

    let names: Vec<&str> = schema.names().collect();
    let records = expand(&sequences, &parts.rest, &names, rng)?;

    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "generation completed"
    );
    Ok(records)
}
