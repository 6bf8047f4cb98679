// src/error.rs
//! Error taxonomy.
//!
//! Only failures that stop work get a type here. A malformed optional field
//! (e.g. an unparseable rating class) and a heuristic miss in the renderer
//! both resolve to `None` and never surface as errors.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The page-loading collaborator could not produce a document. Always fatal.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no page for {0}")]
    MissingPage(String),

    #[error("no document loaded")]
    NoDocument,
}

/// A listed entry is missing something a record cannot exist without.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("entry {id}: missing {what}")]
    StructuralMismatch { what: &'static str, id: String },
}

impl ExtractError {
    pub(crate) fn missing(what: &'static str, id: &str) -> Self {
        Self::StructuralMismatch { what, id: s!(id) }
    }
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}
