//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: the serialized records, for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::scan::{FileReport, ScanReport, SkippedFile};
use crate::summary::{ClassInfo, FunctionInfo, StructuralSummary};

/// Longest docstring excerpt shown in pretty output.
const DOC_EXCERPT_CHARS: usize = 48;

/// Output formats accepted by `--format`.
pub const FORMATS: &[&str] = &["pretty", "json"];

// =============================================================================
// JSON Format
// =============================================================================

/// Serialize any record as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a record to stdout as JSON.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

fn write_header() {
    println!();
    print!("  ");
    print!("{}", "codelens".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();
}

/// Write one file's analysis in pretty format.
pub fn write_file_pretty(report: &FileReport) {
    write_header();

    print!("  {}", "File:       ".dimmed());
    println!("{}", report.path);
    print!("  {}", "Language:   ".dimmed());
    println!("{}", report.language);
    print!("  {}", "Hash:       ".dimmed());
    println!("{}", report.content_hash);
    println!();

    write_stats(&report.summary);
    println!();
    write_structure(&report.summary);
}

/// Write a directory scan in pretty format.
pub fn write_scan_pretty(report: &ScanReport, show_skipped: bool) {
    write_header();

    print!("  {}", "Scanning: ".dimmed());
    println!("{}", report.root);
    println!();

    println!(
        "  {} files, {} functions, {} classes, {} lines",
        report.files.len().to_string().bold(),
        report.function_count(),
        report.class_count(),
        report.total_lines()
    );
    println!();

    if !report.files.is_empty() {
        println!("  {}", "Files:".bold());
        for file in &report.files {
            print!("    {:<44}", file.path.blue());
            print!("{:<12}", file.language.to_string().dimmed());
            print!("{:>4} fn  {:>3} cls  ", file.summary.functions.len(), file.summary.classes.len());
            print!("complexity ");
            write_colored_complexity(file.summary.complexity);
            println!();
        }
        println!();
    }

    if !report.skipped.is_empty() {
        write_skipped(&report.skipped, show_skipped);
        println!();
    }
}

fn write_stats(summary: &StructuralSummary) {
    let stats = &summary.summary;
    println!(
        "  Lines: {} ({} non-empty)  Nodes: {}  Depth: {}",
        stats.total_lines, stats.non_empty_lines, stats.node_count, stats.max_depth
    );
    print!("  Complexity: ");
    write_colored_complexity(summary.complexity);
    println!();
}

fn write_structure(summary: &StructuralSummary) {
    if !summary.functions.is_empty() {
        println!("  {} ({}):", "Functions".bold(), summary.functions.len());
        for f in &summary.functions {
            write_function(f);
        }
        println!();
    }

    if !summary.classes.is_empty() {
        println!("  {} ({}):", "Classes".bold(), summary.classes.len());
        for c in &summary.classes {
            write_class(c);
        }
        println!();
    }

    if !summary.imports.is_empty() {
        println!("  {} ({}):", "Imports".bold(), summary.imports.len());
        for import in &summary.imports {
            // Multi-line import blocks (Go) are shown by their first line
            let first = import.as_str().lines().next().unwrap_or("");
            println!("    {}", first);
        }
        println!();
    }
}

fn write_function(f: &FunctionInfo) {
    let padded = format!("{:<40}", signature(f));
    if f.is_anonymous() {
        print!("    {}", padded.dimmed());
    } else {
        print!("    {}", padded);
    }
    print!("{:<10}", line_range(f.start_line, f.end_line).dimmed());
    if let Some(doc) = &f.docstring {
        print!("{}", excerpt(doc).italic().dimmed());
    }
    println!();
}

/// `name(a, b)`, or `<anonymous>(a, b)` for unnamed closures and lambdas.
fn signature(f: &FunctionInfo) -> String {
    let params = f.params.join(", ");
    if f.is_anonymous() {
        format!("<{}>({})", f.name, params)
    } else {
        format!("{}({})", f.name, params)
    }
}

fn write_class(c: &ClassInfo) {
    print!("    {:<40}", c.name);
    print!("{:<10}", line_range(c.start_line, c.end_line).dimmed());
    if !c.methods.is_empty() {
        print!("{} {}", "methods:".dimmed(), c.methods.join(", "));
    }
    println!();
}

fn write_colored_complexity(score: u32) {
    match score {
        s if s <= 5 => print!("{}", s.to_string().green()),
        s if s <= 10 => print!("{}", s.to_string().yellow()),
        s if s <= 20 => print!("{}", s.to_string().yellow().bold()),
        s => print!("{}", s.to_string().red()),
    }
}

fn write_skipped(skipped: &[SkippedFile], show_details: bool) {
    println!("  {} ({}):", "Skipped".dimmed(), skipped.len());

    if !show_details {
        println!("    {}", "(use --show-skipped to see details)".dimmed());
        return;
    }

    for s in skipped {
        println!("    {:<44}{}", s.path, s.reason.to_string().dimmed());
    }
}

fn line_range(start: usize, end: usize) -> String {
    if start == end {
        format!("L{}", start)
    } else {
        format!("L{}-{}", start, end)
    }
}

/// First line of a docstring, shortened to fit one column.
fn excerpt(doc: &str) -> String {
    let first = doc.lines().next().unwrap_or("");
    if first.chars().count() <= DOC_EXCERPT_CHARS {
        return first.to_string();
    }
    let cut: String = first.chars().take(DOC_EXCERPT_CHARS - 3).collect();
    format!("{}...", cut)
}
