// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verse repair engine.
//!
//! A single forward pass over one chapter's verses that detects two kinds of
//! structural defect and folds each into the nearest preceding intact verse:
//!
//! - **Empty text**: the verse's text is absent or whitespace-only. The
//!   verse is dropped and the previous kept verse's range is extended to
//!   cover its number.
//! - **Numbering gap**: the verse number jumps past what the scan expected.
//!   The previous kept verse's range is extended to cover the hole.
//!
//! Merging is strictly backward: a defect is absorbed by the verse before
//! it, never the one after. The scan has no lookahead, so a defect at the
//! very start of a chapter has no absorber - a leading empty verse is
//! dropped without a defect record, and a leading gap is ignored entirely.
//! That asymmetry is a known limitation of the heuristic, kept deliberately:
//! attributing a leading defect to the *following* verse would need a
//! different algorithm, and downstream consumers rely on ranges only ever
//! extending forward from a kept verse.
//!
//! Non-increasing verse numbers (duplicates, out-of-order entries) are not
//! treated as defects: such a verse is kept verbatim when it has text, and
//! the scan's expectation resets from its number. Degenerate input produces
//! degenerate-but-lossless output rather than an error.
//!
//! **Invariant**: once a kept verse's `end_number` is set, later merges into
//! the same verse only ever raise it (see [`extend_range`]).

use crate::report::{DefectEntry, DefectKind};
use crate::types::{Document, Verse};

/// The result of one repair pass over a chapter's verses.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    /// Retained verses, in original relative order.
    pub verses: Vec<Verse>,
    /// One entry per detected defect, in scan order.
    pub defects: Vec<DefectEntry>,
    /// True iff at least one defect was recorded.
    pub modified: bool,
}

/// Extend a kept verse's range marker to `end`, never shrinking it.
fn extend_range(verse: &mut Verse, end: u32) {
    verse.end_number = Some(verse.end_number.map_or(end, |prev| prev.max(end)));
}

/// Repair one chapter's verse sequence.
///
/// Consumes the input and rebuilds the retained sequence rather than
/// patching it in place; the only mutation is `end_number` on verses already
/// moved into the output buffer, reached by index so nothing aliases.
///
/// `context` is the human-readable book+chapter label ("Genesis 1") stamped
/// onto every defect entry for reporting.
///
/// Total over any input: zero verses, missing text, and broken numbering
/// all produce best-effort output, never an error.
pub fn repair_verses(verses: Vec<Verse>, context: &str) -> RepairOutcome {
    let mut kept: Vec<Verse> = Vec::with_capacity(verses.len());
    let mut defects: Vec<DefectEntry> = Vec::new();
    // Index into `kept` of the most recently retained verse.
    let mut last_kept: Option<usize> = None;
    let mut expected = verses.first().map_or(1, |v| v.number);

    for verse in verses {
        let number = verse.number;

        // Gap check runs first: this verse may close a hole left by its
        // predecessors even when it is itself empty.
        if number > expected {
            if let Some(idx) = last_kept {
                extend_range(&mut kept[idx], number - 1);
                defects.push(DefectEntry {
                    kind: DefectKind::MissingRange,
                    range_start: expected,
                    range_end: number - 1,
                    context: context.to_string(),
                });
            }
            // No kept predecessor: a leading gap has nothing to merge into.
        }

        if verse.is_empty_text() {
            if let Some(idx) = last_kept {
                extend_range(&mut kept[idx], number);
                defects.push(DefectEntry {
                    kind: DefectKind::Empty,
                    range_start: number,
                    range_end: number,
                    context: context.to_string(),
                });
            }
            // Leading empty verse: dropped without a defect record.
        } else {
            last_kept = Some(kept.len());
            kept.push(verse);
        }

        // Every verse advances the expectation, kept or not.
        expected = number + 1;
    }

    let modified = !defects.is_empty();
    RepairOutcome {
        verses: kept,
        defects,
        modified,
    }
}

/// Repair every chapter of every book in a document, in place.
///
/// Returns the full defect list in document order, ready for
/// [`crate::report::group_defects`]. The document was modified iff the list
/// is non-empty (leading-defect drops excepted, which by design leave no
/// record).
pub fn repair_document(doc: &mut Document) -> Vec<DefectEntry> {
    let mut defects = Vec::new();
    for book in &mut doc.books {
        for chapter in &mut book.chapters {
            let context = format!("{} {}", book.name, chapter.number);
            let verses = std::mem::take(&mut chapter.verses);
            let outcome = repair_verses(verses, &context);
            chapter.verses = outcome.verses;
            defects.extend(outcome.defects);
        }
    }
    defects
}
