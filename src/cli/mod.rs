// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the versemend command-line interface.
//!
//! Two subcommands: `fix` to repair documents and write fixed copies, and
//! `inspect` to examine a single document's structure without touching it.
//! The fix command's flags map one-to-one onto [`crate::fix::FixOptions`] -
//! behavior is configured per invocation, never through process-wide state.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "versemend",
    about = "Structural repair for JSON Bible corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Repair documents and write fixed copies
    Fix {
        /// Input document, or a directory of .json documents
        #[arg(short, long)]
        input: String,

        /// Output directory for the fixed_* copies
        #[arg(short, long)]
        output: String,

        /// Detect and report defects without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Write indented JSON instead of compact
        #[arg(long)]
        pretty: bool,

        /// Also persist the defect report to a timestamped log file
        #[arg(long)]
        log: bool,
    },

    /// Inspect a document's structure and the defects a repair would find
    Inspect {
        /// Path to a corpus .json document
        file: String,
    },
}
