// src/store.rs
//! Record list ⇄ JSON file.
//!
//! The file is a single JSON array, pretty-printed with 4-space indentation,
//! non-ASCII text kept as-is. Absent optional fields are left out entirely.

use std::{fs, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::config::consts::JSON_INDENT;
use crate::error::StoreError;
use crate::file::write_output;
use crate::record::Record;

pub fn to_json(records: &[Record]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::with_capacity(records.len() * 256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    records.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn from_json(bytes: &[u8]) -> Result<Vec<Record>, StoreError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Overwrite `path` with `records`. Parent directories are created.
pub fn save_records(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    let bytes = to_json(records)?;
    write_output(path, &bytes).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), records = records.len(), "Saved records");
    Ok(())
}

pub fn load_records(path: &Path) -> Result<Vec<Record>, StoreError> {
    let bytes = fs::read(path).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    let records = from_json(&bytes)?;
    info!(path = %path.display(), records = records.len(), "Loaded records");
    Ok(records)
}
