// src/render/mod.rs
//! Records → one self-contained HTML document.
//!
//! One review block per record, in input order, between a fixed head and
//! tail. Derived display fields come from [`fields`]; everything taken from a
//! record is HTML-escaped.

pub mod fields;
mod template;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::RenderError;
use crate::file::write_output;
use crate::record::Record;

use fields::DerivedFields;

pub fn render(records: &[Record]) -> String {
    let mut out = template::head();
    for record in records {
        out.push_str(&template::review_block(record, &DerivedFields::derive(record)));
    }
    out.push_str(template::TAIL);
    out
}

/// Render and overwrite `path`. Returns the path written.
pub fn render_to_path(records: &[Record], path: &Path) -> Result<PathBuf, RenderError> {
    let html = render(records);
    write_output(path, html.as_bytes()).map_err(|source| RenderError::Io { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), reviews = records.len(), "HTML written");
    Ok(path.to_path_buf())
}

/// Number of review blocks in a rendered document.
pub fn count_blocks(html: &str) -> usize {
    html.matches(template::BLOCK_OPEN).count()
}
