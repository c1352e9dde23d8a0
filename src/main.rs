use clap::Parser;
use std::path::Path;
use std::process;

use versemend::cli::{display, Cli, Commands};
use versemend::error::FixError;
use versemend::fix::{load_document, run_fix, FixOptions};
use versemend::repair::repair_document;
use versemend::report::group_defects;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fix {
            input,
            output,
            dry_run,
            pretty,
            log,
        } => {
            let options = FixOptions {
                dry_run,
                pretty,
                write_log: log,
            };
            if let Err(e) = run_fix(Path::new(&input), Path::new(&output), &options) {
                eprintln!("❌ {}", e);
                process::exit(1);
            }
        }
        Commands::Inspect { file } => {
            if let Err(e) = inspect_file(Path::new(&file)) {
                eprintln!("❌ {}", e);
                process::exit(1);
            }
        }
    }
}

/// Inspect a corpus document: structure counts per book, plus the defects a
/// repair pass would record. Nothing is written.
fn inspect_file(path: &Path) -> Result<(), FixError> {
    let root = load_document(path)?;
    let doc = root.document();

    let chapter_count: usize = doc.books.iter().map(|b| b.chapters.len()).sum();
    let verse_count: usize = doc
        .books
        .iter()
        .flat_map(|b| &b.chapters)
        .map(|c| c.verses.len())
        .sum();

    // Repair a scratch copy to preview what fixing would do.
    let mut scratch = doc.clone();
    let grouped = group_defects(&repair_document(&mut scratch));

    const W: usize = 60;
    println!();
    println!("╔{}╗", "═".repeat(W));
    println!("║{:^w$}║", "VERSEMEND DOCUMENT INSPECTOR", w = W);
    println!("╠{}╣", "═".repeat(W));
    println!(
        "║  {:<12} {:<43}  ║",
        "File:",
        truncate_path(&path.display().to_string(), 43)
    );
    println!(
        "║  {:<12} {:<43}  ║",
        "Identifier:",
        root.identifier().unwrap_or("(none)")
    );
    println!("║  {:<12} {:<43}  ║", "Books:", doc.books.len());
    println!("║  {:<12} {:<43}  ║", "Chapters:", chapter_count);
    println!("║  {:<12} {:<43}  ║", "Verses:", verse_count);
    println!("╚{}╝", "═".repeat(W));
    println!();

    for book in &doc.books {
        let verses: usize = book.chapters.iter().map(|c| c.verses.len()).sum();
        println!(
            "  {:<28} {:>4} chapters {:>7} verses",
            book.name,
            book.chapters.len(),
            verses
        );
    }

    println!();
    if grouped.is_empty() {
        println!("✓ No structural defects found");
    } else {
        println!("A repair pass would record {} defect(s):", grouped.len());
        for entry in &grouped {
            println!("   {}", display::defect_line(entry));
        }
    }
    Ok(())
}

/// Truncate a path to fit in the given width, keeping the tail.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        path.to_string()
    } else {
        format!("...{}", &path[path.len() - max_len + 3..])
    }
}
