// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the fix pipeline.
//!
//! `Parse` is the only variant the batch loop swallows: a malformed document
//! is reported with its location hint, counted, and processing moves on.
//! Everything else (unreadable input listing, output directory or write
//! failures) aborts the run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed document: not valid JSON, or the wrong top-level shape.
    /// Line and column come from the parser when derivable.
    #[error("{path}: not a valid corpus document: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no .json documents found in {path}")]
    NoInputs { path: PathBuf },
}

impl FixError {
    /// Wrap a serde_json failure for `path`, capturing its location hint.
    pub fn parse(path: &Path, err: &serde_json::Error) -> Self {
        FixError::Parse {
            path: path.to_path_buf(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }

    /// True for per-file failures the batch loop skips over.
    pub fn is_skippable(&self) -> bool {
        matches!(self, FixError::Parse { .. })
    }
}
