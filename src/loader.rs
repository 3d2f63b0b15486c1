use crate::errors::LoadError;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read the file at `path` and parse it as a JSON document.
///
/// A missing file and a file that does not contain well-formed JSON are both
/// reported as errors; the caller decides how to terminate.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => LoadError::SourceNotFound(path.to_path_buf()),
        _ => LoadError::Unreadable(path.to_path_buf(), err),
    })?;

    let document: Value = serde_json::from_str(&contents)
        .map_err(|err| LoadError::MalformedDocument(path.to_path_buf(), err))?;

    debug!("loaded {} ({})", path.display(), kind_of(&document));

    Ok(document)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
