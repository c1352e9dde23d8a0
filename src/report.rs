// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Defect grouping and report formatting.
//!
//! The repair engine emits one entry per defect, which gets noisy when a
//! converter mangles whole runs of verses. The grouper coalesces adjacent
//! entries of the same kind and context whose ranges touch, so ten dropped
//! verses read as one line instead of ten.
//!
//! Grouping is a single forward pass that only ever compares against the
//! last grouped entry. Entries separated by an unrelated defect are never
//! re-merged, even when numerically contiguous - the report preserves the
//! order in which problems were found.

/// The two structural defect classes the engine can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectKind {
    /// A verse with absent or whitespace-only text.
    Empty,
    /// A hole in the verse numbering.
    MissingRange,
}

impl DefectKind {
    pub fn label(self) -> &'static str {
        match self {
            DefectKind::Empty => "Empty verse",
            DefectKind::MissingRange => "Missing verses",
        }
    }
}

/// One detected defect, covering the inclusive verse range
/// `[range_start, range_end]` within `context`.
///
/// Transient by design: entries are created during a repair pass, consumed
/// by the reporter, and never written back into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectEntry {
    pub kind: DefectKind,
    pub range_start: u32,
    pub range_end: u32,
    /// Book + chapter label, e.g. "Genesis 1".
    pub context: String,
}

impl DefectEntry {
    /// `"5"` for a single verse, `"3-7"` for a span.
    pub fn range_label(&self) -> String {
        if self.range_start == self.range_end {
            self.range_start.to_string()
        } else {
            format!("{}-{}", self.range_start, self.range_end)
        }
    }
}

/// Coalesce adjacent same-kind, same-context, contiguous entries.
///
/// Idempotent on its own output: once ranges are maximal, a second pass
/// finds nothing left to merge.
pub fn group_defects(defects: &[DefectEntry]) -> Vec<DefectEntry> {
    let mut grouped: Vec<DefectEntry> = Vec::with_capacity(defects.len());
    for entry in defects {
        match grouped.last_mut() {
            Some(last)
                if last.kind == entry.kind
                    && last.context == entry.context
                    && entry.range_start == last.range_end + 1 =>
            {
                last.range_end = entry.range_end;
            }
            _ => grouped.push(entry.clone()),
        }
    }
    grouped
}

/// Render one grouped entry as a display line: `"<label> <range> at <context>"`.
pub fn format_defect(entry: &DefectEntry) -> String {
    format!(
        "{} {} at {}",
        entry.kind.label(),
        entry.range_label(),
        entry.context
    )
}

/// Group a defect list and render every entry.
pub fn render_report(defects: &[DefectEntry]) -> Vec<String> {
    group_defects(defects).iter().map(format_defect).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: DefectKind, start: u32, end: u32, context: &str) -> DefectEntry {
        DefectEntry {
            kind,
            range_start: start,
            range_end: end,
            context: context.to_string(),
        }
    }

    #[test]
    fn contiguous_same_kind_entries_merge() {
        let defects = vec![
            entry(DefectKind::Empty, 5, 5, "Genesis 1"),
            entry(DefectKind::Empty, 6, 6, "Genesis 1"),
        ];
        let grouped = group_defects(&defects);
        assert_eq!(grouped.len(), 1);
        assert_eq!((grouped[0].range_start, grouped[0].range_end), (5, 6));
        assert_eq!(format_defect(&grouped[0]), "Empty verse 5-6 at Genesis 1");
    }

    #[test]
    fn kind_mismatch_blocks_merging() {
        let defects = vec![
            entry(DefectKind::Empty, 5, 5, "Genesis 1"),
            entry(DefectKind::MissingRange, 6, 6, "Genesis 1"),
        ];
        assert_eq!(group_defects(&defects).len(), 2);
    }

    #[test]
    fn context_mismatch_blocks_merging() {
        let defects = vec![
            entry(DefectKind::Empty, 5, 5, "Genesis 1"),
            entry(DefectKind::Empty, 6, 6, "Genesis 2"),
        ];
        assert_eq!(group_defects(&defects).len(), 2);
    }

    #[test]
    fn non_contiguous_ranges_stay_apart() {
        let defects = vec![
            entry(DefectKind::Empty, 5, 5, "Genesis 1"),
            entry(DefectKind::Empty, 7, 7, "Genesis 1"),
        ];
        assert_eq!(group_defects(&defects).len(), 2);
    }

    #[test]
    fn interleaved_defect_prevents_remerge() {
        // 5 and 7 would be contiguous with 6 gone, but the scan never looks
        // back past the entry in between.
        let defects = vec![
            entry(DefectKind::Empty, 5, 5, "Genesis 1"),
            entry(DefectKind::MissingRange, 6, 6, "Genesis 1"),
            entry(DefectKind::Empty, 7, 7, "Genesis 1"),
        ];
        assert_eq!(group_defects(&defects).len(), 3);
    }

    #[test]
    fn grouping_is_idempotent() {
        let defects = vec![
            entry(DefectKind::Empty, 5, 5, "Genesis 1"),
            entry(DefectKind::Empty, 6, 6, "Genesis 1"),
            entry(DefectKind::MissingRange, 2, 3, "Exodus 4"),
        ];
        let once = group_defects(&defects);
        let twice = group_defects(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn single_verse_renders_without_dash() {
        let e = entry(DefectKind::MissingRange, 3, 3, "Ruth 2");
        assert_eq!(format_defect(&e), "Missing verses 3 at Ruth 2");
        let e = entry(DefectKind::MissingRange, 3, 4, "Ruth 2");
        assert_eq!(format_defect(&e), "Missing verses 3-4 at Ruth 2");
    }

    #[test]
    fn render_report_groups_then_formats() {
        let defects = vec![
            entry(DefectKind::Empty, 5, 5, "Genesis 1"),
            entry(DefectKind::Empty, 6, 6, "Genesis 1"),
            entry(DefectKind::MissingRange, 8, 9, "Genesis 1"),
        ];
        let lines = render_report(&defects);
        assert_eq!(
            lines,
            vec![
                "Empty verse 5-6 at Genesis 1".to_string(),
                "Missing verses 8-9 at Genesis 1".to_string(),
            ]
        );
    }
}
