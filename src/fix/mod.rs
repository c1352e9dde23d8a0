// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fix pipeline: everything around the repair engine.
//!
//! Discovers input documents, runs parse → repair → group → report per file,
//! writes `fixed_` copies, and keeps the batch moving when an individual
//! document is malformed. A parse failure is reported with its location
//! hint and counted; it never aborts the remaining files.
//!
//! All behavior switches live in [`FixOptions`], passed explicitly - there
//! is no global mode state anywhere in the crate.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::display;
use crate::error::FixError;
use crate::repair::repair_document;
use crate::report::{format_defect, group_defects, DefectEntry};
use crate::types::DocumentRoot;

/// Per-invocation configuration for [`run_fix`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    /// Detect and report defects, but write nothing (no documents, no log).
    pub dry_run: bool,
    /// Indented output instead of compact.
    pub pretty: bool,
    /// Additionally persist the report lines to a timestamped log file.
    pub write_log: bool,
}

/// What a [`run_fix`] batch accomplished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixSummary {
    /// Documents repaired (including ones that needed no repair).
    pub processed: usize,
    /// Documents skipped because they failed to parse.
    pub skipped: usize,
    /// Grouped defect entries across the whole batch.
    pub defects: usize,
    /// Path of the written log file, when one was requested.
    pub log_file: Option<PathBuf>,
}

/// Read and parse one corpus document.
pub fn load_document(path: &Path) -> Result<DocumentRoot, FixError> {
    let raw = fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|err| FixError::parse(path, &err))
}

/// Serialize a document the way the options ask for, trailing newline included.
pub fn serialize_document(
    root: &DocumentRoot,
    pretty: bool,
    path: &Path,
) -> Result<String, FixError> {
    let result = if pretty {
        serde_json::to_string_pretty(root)
    } else {
        serde_json::to_string(root)
    };
    let mut serialized = result.map_err(|source| FixError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    serialized.push('\n');
    Ok(serialized)
}

/// Repair a whole batch of documents.
///
/// `input` is a single document or a directory whose direct `.json` children
/// are processed in name order. Fixed copies land in `output` as
/// `fixed_<original name>`.
pub fn run_fix(input: &Path, output: &Path, options: &FixOptions) -> Result<FixSummary, FixError> {
    // 1. Collect input documents.
    let files = collect_inputs(input)?;

    // 2. Ensure the output directory exists. A dry run writes nothing.
    if !options.dry_run {
        fs::create_dir_all(output).map_err(|source| FixError::CreateDir {
            path: output.to_path_buf(),
            source,
        })?;
    }

    // 3. Repair each document, skipping the ones that fail to parse.
    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut defect_total = 0usize;
    let mut report_lines: Vec<String> = Vec::new();

    for path in &files {
        let name = file_name(path);
        match fix_file(path, output, options) {
            Ok(grouped) => {
                processed += 1;
                defect_total += grouped.len();
                eprintln!("{}", display::file_header(&name, grouped.len()));
                for entry in &grouped {
                    eprintln!("   {}", display::defect_line(entry));
                    report_lines.push(format_defect(entry));
                }
            }
            Err(err) if err.is_skippable() => {
                skipped += 1;
                eprintln!("⚠️  skipped: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    // 4. Persist the report when asked to.
    let log_file = if options.write_log && !options.dry_run {
        Some(write_log_file(output, &report_lines)?)
    } else {
        None
    };

    // 5. Final summary.
    eprintln!();
    if options.dry_run {
        eprintln!("✅ Dry run complete (nothing written)");
    } else {
        eprintln!("✅ Fix complete");
    }
    eprintln!(
        "   {} documents │ {} defects │ {} skipped",
        processed, defect_total, skipped
    );
    if let Some(path) = &log_file {
        eprintln!("   report → {}", path.display());
    }

    Ok(FixSummary {
        processed,
        skipped,
        defects: defect_total,
        log_file,
    })
}

/// Repair a single document and write its fixed copy.
///
/// Returns the grouped defect entries for reporting.
fn fix_file(
    path: &Path,
    output: &Path,
    options: &FixOptions,
) -> Result<Vec<DefectEntry>, FixError> {
    let mut root = load_document(path)?;
    let defects = repair_document(root.document_mut());
    let grouped = group_defects(&defects);

    if !options.dry_run {
        let out_path = output.join(format!("fixed_{}", file_name(path)));
        let serialized = serialize_document(&root, options.pretty, &out_path)?;
        fs::write(&out_path, serialized).map_err(|source| FixError::Write {
            path: out_path.clone(),
            source,
        })?;
    }

    Ok(grouped)
}

fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>, FixError> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let entries = fs::read_dir(input).map_err(|source| FixError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    // Name order keeps batch output and log contents deterministic.
    files.sort();

    if files.is_empty() {
        return Err(FixError::NoInputs {
            path: input.to_path_buf(),
        });
    }
    Ok(files)
}

fn write_log_file(output: &Path, lines: &[String]) -> Result<PathBuf, FixError> {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let path = output.join(format!("fix-report-{stamp}.log"));
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents).map_err(|source| FixError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn collect_inputs_accepts_a_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{}").unwrap();
        assert_eq!(collect_inputs(&path).unwrap(), vec![path]);
    }

    #[test]
    fn collect_inputs_filters_and_sorts_json_children() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.json", "a.json", "notes.txt", "c.JSON"] {
            let mut f = fs::File::create(dir.path().join(name)).unwrap();
            writeln!(f, "{{}}").unwrap();
        }
        let files = collect_inputs(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|p| file_name(p)).collect();
        // Extension match is exact: .JSON and .txt are both ignored.
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn collect_inputs_rejects_an_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            collect_inputs(dir.path()),
            Err(FixError::NoInputs { .. })
        ));
    }

    #[test]
    fn serialize_modes_differ() {
        let root: DocumentRoot = serde_json::from_str(r#"{"books":[]}"#).unwrap();
        let compact = serialize_document(&root, false, Path::new("x.json")).unwrap();
        let pretty = serialize_document(&root, true, Path::new("x.json")).unwrap();
        assert_eq!(compact, "{\"books\":[]}\n");
        assert!(pretty.contains('\n'));
        assert_ne!(compact, pretty);
    }
}
