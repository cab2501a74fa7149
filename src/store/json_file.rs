use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::TasktunesError;

pub const TASKS_FILE: &str = "tasks.json";
pub const MOODS_FILE: &str = "moods.json";

/// Read a top-level JSON array of records.
///
/// Returns `Ok(None)` when the file does not exist. Any other I/O failure or a
/// document that is not a JSON array is an error.
pub fn read_records(path: &Path) -> Result<Option<Vec<Value>>, TasktunesError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TasktunesError::file_access(path, &e)),
    };
    let records: Vec<Value> =
        serde_json::from_str(&contents).map_err(|e| TasktunesError::malformed(path, &e))?;
    Ok(Some(records))
}

/// Overwrite `path` with the records as a 4-space indented JSON array. Each record
/// keeps its struct field order.
///
/// Not atomic: a crash mid-write can leave a truncated file behind.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), TasktunesError> {
    let rendered = render(records)?;
    fs::write(path, rendered).map_err(|e| TasktunesError::file_access(path, &e))
}

pub fn render<T: Serialize>(records: &[T]) -> Result<Vec<u8>, TasktunesError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    Ok(buf)
}
