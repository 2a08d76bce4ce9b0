use std::fs;
use std::path::{Path, PathBuf};

use datamock_core::Schema;
use datamock_generate::RecordCollection;

use crate::CliError;

/// Load and validate a schema document from disk.
///
/// The path must carry a `.json` extension and hold a non-empty JSON
/// document; the decoded value is validated by [`Schema::from_value`].
pub fn load_schema(path: &Path) -> Result<Schema, CliError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return Err(CliError::InvalidInput(format!(
            "schema file '{}' must have a .json extension",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Err(CliError::InvalidInput(format!(
            "schema file '{}' is empty",
            path.display()
        )));
    }

    let document: serde_json::Value = serde_json::from_str(&contents)?;
    Ok(Schema::from_value(document)?)
}

/// Destination derived from the source filename: `<stem>.data.json` beside
/// the source.
pub fn default_destination(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("records");
    source.with_file_name(format!("{stem}.data.json"))
}

/// Serialize the collection as pretty-printed JSON; returns bytes written.
pub fn write_records(path: &Path, records: &RecordCollection) -> Result<u64, CliError> {
    let bytes = serde_json::to_vec_pretty(records)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}
