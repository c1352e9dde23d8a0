// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the versemend CLI.
//!
//! Small touches that keep batch output readable: defect labels colored by
//! severity (missing verses red, empty verses yellow), dimmed file headers,
//! and check marks for clean documents. Respects `NO_COLOR` and falls back
//! to plain text when stderr is not a TTY, so piped output and log files
//! stay free of escape codes.

use std::sync::OnceLock;

use crate::report::{format_defect, DefectEntry, DefectKind};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Cached color decision for the process.
static COLOR: OnceLock<bool> = OnceLock::new();

fn detect_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Whether output should carry ANSI colors.
pub fn color_enabled() -> bool {
    *COLOR.get_or_init(detect_color)
}

/// Wrap `text` in `color` codes when the terminal supports them.
pub fn paint(text: &str, color: &str) -> String {
    if color_enabled() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn kind_color(kind: DefectKind) -> &'static str {
    match kind {
        DefectKind::Empty => YELLOW,
        DefectKind::MissingRange => RED,
    }
}

/// One report line with the defect label colored by kind.
pub fn defect_line(entry: &DefectEntry) -> String {
    if !color_enabled() {
        return format_defect(entry);
    }
    format!(
        "{}{}{} {} at {}",
        kind_color(entry.kind),
        entry.kind.label(),
        RESET,
        entry.range_label(),
        entry.context
    )
}

/// Per-file header: name plus defect count, or a check mark when clean.
pub fn file_header(name: &str, defects: usize) -> String {
    if defects == 0 {
        format!("{} {}: no defects", paint("✓", GREEN), name)
    } else {
        let noun = if defects == 1 { "defect" } else { "defects" };
        format!("{} {} {}", paint(name, BOLD), defects, paint(noun, DIM))
    }
}
