use std::collections::HashMap;

use chrono::Local;
use rand::RngCore;

use datamock_core::{Field, Result};

use crate::generator::compute_rest_value;
use crate::record::{Record, RecordCollection};
use crate::values::FieldValue;

/// A loop field resolved to its ordered value sequence.
#[derive(Debug, Clone)]
pub struct LoopSequence {
    pub name: String,
    pub values: Vec<FieldValue>,
}

/// Produce one record per combination of the loop sequences.
///
/// Iteration is nested outer-to-inner in sequence order (the last sequence
/// advances fastest). Each record is assembled in schema declaration order
/// (`names`): loop fields take the combination value, rest fields are
/// computed fresh per record, and rest fields without a value are omitted.
/// Any failure while computing a rest value aborts the expansion with no
/// partial collection.
pub fn expand(
    sequences: &[LoopSequence],
    rest: &[&Field],
    names: &[&str],
    rng: &mut dyn RngCore,
) -> Result<RecordCollection> {
    let loop_index: HashMap<&str, usize> = sequences
        .iter()
        .enumerate()
        .map(|(dim, seq)| (seq.name.as_str(), dim))
        .collect();
    let rest_fields: HashMap<&str, &Field> = rest
        .iter()
        .map(|field| (field.name.as_str(), *field))
        .collect();

    let lens: Vec<usize> = sequences.iter().map(|seq| seq.values.len()).collect();
    let mut records = Vec::with_capacity(lens.iter().product());

    for combination in cartesian_indices(&lens) {
        let now = Local::now().naive_local();
        let mut record = Record::new();
        for name in names {
            if let Some(&dim) = loop_index.get(name) {
                record.insert(*name, sequences[dim].values[combination[dim]].clone());
            } else if let Some(field) = rest_fields.get(name) {
                if let Some(value) = compute_rest_value(field, now, rng)? {
                    record.insert(*name, value);
                }
            }
        }
        records.push(record);
    }

    Ok(RecordCollection::from_records(records))
}

/// Iterator over the index tuples of an N-dimensional Cartesian product.
/// The rightmost dimension advances fastest.
struct CartesianIndices {
    lens: Vec<usize>,
    cursor: Vec<usize>,
    done: bool,
}

fn cartesian_indices(lens: &[usize]) -> CartesianIndices {
    CartesianIndices {
        lens: lens.to_vec(),
        cursor: vec![0; lens.len()],
        done: lens.iter().any(|&len| len == 0),
    }
}

impl Iterator for CartesianIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.cursor.clone();

        let mut dim = self.lens.len();
        loop {
            if dim == 0 {
                self.done = true;
                break;
            }
            dim -= 1;
            self.cursor[dim] += 1;
            if self.cursor[dim] < self.lens[dim] {
                break;
            }
            self.cursor[dim] = 0;
        }
        Some(current)
    }
}
