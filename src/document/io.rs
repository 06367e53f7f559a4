//! Reading and writing documentation files.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};

use super::Document;
use crate::error::{Error, ParseError, Result};

/// Load a documentation file whose top-level value is a JSON object.
pub fn load(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).map_err(|e| Error::file_access(path, e))?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| Error::parse(path, e))?;
    match value {
        Value::Object(entries) => Ok(Document::from(entries)),
        other => Err(Error::parse(
            path,
            ParseError::NotAnObject(json_kind(&other)),
        )),
    }
}

/// Write `doc` as compact JSON, replacing any file already at `path`.
///
/// The file is written in place; an interrupted write can leave it truncated.
pub fn save<D: AsRef<Map<String, Value>>>(doc: &D, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::file_access(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, doc.as_ref())
        .map_err(|e| Error::file_access(path, io::Error::from(e)))?;
    writer.flush().map_err(|e| Error::file_access(path, e))?;

    log::debug!(
        "Wrote {} entries to {}",
        doc.as_ref().len(),
        path.display()
    );
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
