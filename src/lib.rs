//! Structural repair for JSON-encoded Bible corpora.
//!
//! Upstream format converters routinely leave two kinds of damage behind:
//! verses whose text went missing, and holes in the verse numbering. This
//! crate detects both with a single linear scan per chapter, folds each
//! defect into the nearest preceding intact verse as a range marker, and
//! reports every change as grouped, human-readable lines.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  repair.rs   │────▶│  report.rs  │
//! │ (Document,  │     │ (repair_     │     │ (group_     │
//! │  Verse, …)  │     │  verses)     │     │  defects)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      fix/mod.rs                      │
//! │   (batch pipeline: discover, parse, repair, write,   │
//! │    skip malformed files, summarize, persist log)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Known limitation
//!
//! The heuristic always attributes a defect to the *preceding* verse. There
//! is no mechanism to attach a leading defect to the verse that follows it,
//! so an empty first verse is dropped without record and a gap before the
//! first kept verse is ignored. See [`repair`] for the full policy.
//!
//! # Usage
//!
//! ```
//! use versemend::repair::repair_verses;
//! use versemend::report::render_report;
//! use versemend::testing::{empty_verse, verse};
//!
//! let verses = vec![verse(1, "In the beginning"), empty_verse(2), verse(3, "And the earth")];
//! let outcome = repair_verses(verses, "Genesis 1");
//!
//! assert_eq!(outcome.verses[0].end_number, Some(2));
//! assert_eq!(render_report(&outcome.defects), vec!["Empty verse 2 at Genesis 1"]);
//! ```

pub mod cli;
pub mod error;
pub mod fix;
pub mod repair;
pub mod report;
pub mod testing;
pub mod types;

// Re-exports for public API
pub use error::FixError;
pub use fix::{load_document, run_fix, FixOptions, FixSummary};
pub use repair::{repair_document, repair_verses, RepairOutcome};
pub use report::{format_defect, group_defects, render_report, DefectEntry, DefectKind};
pub use types::{Book, Chapter, Document, DocumentRoot, Verse};
