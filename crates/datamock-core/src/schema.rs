use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::field::FieldSpec;
use crate::validation::{validate_loop_field, validate_rest_field};

/// Number of loop dimensions honored by the expansion engine.
pub const LOOP_DIMENSIONS: usize = 3;

/// A named field definition in declaration order.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub spec: FieldSpec,
}

/// Ordered collection of validated field definitions.
///
/// Declaration order is preserved from the source document and determines
/// the key order of every generated record.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<Field>,
}

/// Loop/rest split of a schema.
#[derive(Debug)]
pub struct Partitioned<'a> {
    /// Expansion dimensions, ordered by ascending `loopOrder`.
    pub loops: Vec<&'a Field>,
    /// Qualifying loop fields beyond the honored dimensions. Never expanded
    /// and omitted from records; the engine reports them.
    pub ignored: Vec<&'a Field>,
    /// Fields computed independently per record.
    pub rest: Vec<&'a Field>,
}

impl Schema {
    /// Build and validate a schema from a decoded JSON document.
    ///
    /// The document must be an object mapping field names to definitions.
    /// Every field is validated for its role here; an invalid spec aborts
    /// before any record is produced.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(SchemaError::InvalidDocument(
                "expected an object mapping field names to definitions".to_string(),
            ));
        };

        let mut fields = Vec::with_capacity(map.len());
        for (name, raw) in map {
            let spec: FieldSpec = serde_json::from_value(raw)
                .map_err(|err| SchemaError::invalid_field(name.as_str(), err.to_string()))?;
            fields.push(Field { name, spec });
        }
        if fields.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        let schema = Schema { fields };
        {
            let parts = schema.partition()?;
            for field in parts.loops.iter().chain(parts.ignored.iter()) {
                validate_loop_field(&field.name, &field.spec)?;
            }
            for field in &parts.rest {
                validate_rest_field(&field.name, &field.spec)?;
            }
        }
        Ok(schema)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Split the schema into loop dimensions and rest fields.
    ///
    /// A field is a loop field iff `loopOrder` is present and >0. Loop
    /// fields sort by ascending `loopOrder` (stable, so ties keep
    /// declaration order); the first [`LOOP_DIMENSIONS`] become the
    /// expansion dimensions.
    pub fn partition(&self) -> Result<Partitioned<'_>> {
        let mut loops: Vec<&Field> = Vec::new();
        let mut rest: Vec<&Field> = Vec::new();
        for field in &self.fields {
            if field.spec.is_loop() {
                loops.push(field);
            } else {
                rest.push(field);
            }
        }
        loops.sort_by_key(|field| field.spec.loop_order.unwrap_or(0));

        if loops.len() < LOOP_DIMENSIONS {
            return Err(SchemaError::InsufficientLoopFields { found: loops.len() });
        }
        let ignored = loops.split_off(LOOP_DIMENSIONS);

        Ok(Partitioned {
            loops,
            ignored,
            rest,
        })
    }
}
