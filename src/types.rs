// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document model for JSON Bible corpora.
//!
//! These types mirror the JSON shape that upstream converters emit: a root
//! holding books, books holding chapters, chapters holding verses. Two root
//! shapes exist in the wild - a bare `{"books": [...]}` object, and a
//! two-element `[identifier, {"books": [...]}]` array produced by tools that
//! tag each corpus with a translation identifier. [`DocumentRoot`] accepts
//! both and reattaches the wrapper unchanged on output.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Verse**: `end_number`, when set, is ≥ `number`. A verse with an
//!   `end_number` stands in for the whole inclusive range
//!   `[number, end_number]`; within one repair pass the range only ever
//!   grows (see [`crate::repair`]).
//! - **Chapter**: verse order is input order. Nothing here sorts.
//!
//! Fields the model does not understand (translator notes, copyright blobs,
//! whatever the converter attached) are captured in a flattened map and
//! written back verbatim, so a repair pass never strips metadata it didn't
//! touch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single verse entry, possibly standing in for a range of verses.
///
/// `text` is optional on input because broken converters omit it entirely;
/// an absent text is treated the same as a whitespace-only one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Present when this entry absorbed defective successors: the entry
    /// represents verses `number..=end_number`.
    #[serde(
        rename = "endNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub end_number: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Verse {
    /// True when the verse carries no usable text: the field is absent or
    /// collapses to nothing after trimming.
    pub fn is_empty_text(&self) -> bool {
        self.text.as_deref().is_none_or(|t| t.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub verses: Vec<Verse>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub chapters: Vec<Chapter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub books: Vec<Book>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A corpus document as found on disk: bare, or wrapped with an identifier.
///
/// The wrapped form is a two-element JSON array `[identifier, document]`.
/// Repair always operates on the inner document; the wrapper round-trips
/// untouched. Anything that is neither shape fails to parse, which the fix
/// pipeline reports per-file and skips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentRoot {
    Wrapped(String, Document),
    Bare(Document),
}

impl DocumentRoot {
    pub fn document(&self) -> &Document {
        match self {
            DocumentRoot::Wrapped(_, doc) | DocumentRoot::Bare(doc) => doc,
        }
    }

    pub fn document_mut(&mut self) -> &mut Document {
        match self {
            DocumentRoot::Wrapped(_, doc) | DocumentRoot::Bare(doc) => doc,
        }
    }

    /// The wrapper identifier, when the document came in wrapped form.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            DocumentRoot::Wrapped(id, _) => Some(id),
            DocumentRoot::Bare(_) => None,
        }
    }
}
