//! Command-line interface for codelens.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::analyzer::Analyzer;
use crate::config::ScanConfig;
use crate::hash::content_hash;
use crate::language::{detect_language, LanguageId};
use crate::report;
use crate::scan::{FileReport, Scanner};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Multi-language structural code analyzer.
///
/// Parses source files with tree-sitter and reports their functions,
/// classes, imports, cyclomatic complexity and size statistics.
/// Supported languages: python, javascript, typescript, java, c, cpp, go, rust.
#[derive(Parser)]
#[command(name = "codelens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single source file
    Analyze(AnalyzeArgs),
    /// Analyze every supported file under a directory
    Scan(ScanArgs),
    /// Print the language detected for each filename
    Detect(DetectArgs),
    /// Print the content hash of a file
    Hash(HashArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Source file to analyze
    pub file: PathBuf,

    /// Language id (default: detect from the file extension)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Directory to scan
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover in the scan root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Maximum number of files to analyze (overrides the config)
    #[arg(long)]
    pub max_files: Option<usize>,

    /// List skipped files and the reason for each
    #[arg(long)]
    pub show_skipped: bool,
}

/// Arguments for the detect command.
#[derive(Parser)]
pub struct DetectArgs {
    /// Filenames to classify (need not exist)
    #[arg(required = true)]
    pub filenames: Vec<String>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the hash command.
#[derive(Parser)]
pub struct HashArgs {
    /// File to hash
    pub file: PathBuf,
}

fn check_format(format: &str) -> anyhow::Result<()> {
    if !report::FORMATS.contains(&format) {
        anyhow::bail!(
            "invalid format {:?}, must be one of: {}",
            format,
            report::FORMATS.join(", ")
        );
    }
    Ok(())
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    check_format(&args.format)?;

    let language = match &args.language {
        Some(id) => match id.parse::<LanguageId>() {
            Ok(language) => language,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(EXIT_FAILED);
            }
        },
        None => {
            let name = args
                .file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match detect_language(&name) {
                Some(language) => language,
                None => {
                    eprintln!(
                        "cannot detect language of {} (use --language)",
                        args.file.display()
                    );
                    return Ok(EXIT_FAILED);
                }
            }
        }
    };

    let source = read_source(&args.file)?;
    let summary = Analyzer::new(language)?.analyze(&source);

    let file_report = FileReport {
        path: args.file.display().to_string(),
        language,
        content_hash: content_hash(&source),
        size: source.len() as u64,
        summary,
    };

    match args.format.as_str() {
        "json" => report::write_json(&file_report)?,
        _ => report::write_file_pretty(&file_report),
    }

    Ok(EXIT_SUCCESS)
}

/// Load the scan config: explicit file, then discovered file, then defaults.
fn load_config(args: &ScanArgs) -> anyhow::Result<ScanConfig> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::parse_file(path)?,
        None => ScanConfig::discover(&args.path)?.unwrap_or_default(),
    };

    if let Some(max_files) = args.max_files {
        config.max_files = max_files;
    }
    Ok(config)
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::default_bar().template("  {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} files")
    {
        bar.set_style(style.progress_chars("##-"));
    }
    bar
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    check_format(&args.format)?;

    if !args.path.is_dir() {
        anyhow::bail!("{} is not a directory", args.path.display());
    }

    let config = load_config(args)?;
    let mut scanner = Scanner::new(config)?;
    if args.format == "pretty" {
        scanner = scanner.with_progress(progress_bar());
    }

    let scan_report = scanner.scan(&args.path)?;

    match args.format.as_str() {
        "json" => report::write_json(&scan_report)?,
        _ => report::write_scan_pretty(&scan_report, args.show_skipped),
    }

    if scan_report.files.is_empty() {
        return Ok(EXIT_FAILED);
    }
    Ok(EXIT_SUCCESS)
}

#[derive(Serialize)]
struct Detection<'a> {
    filename: &'a str,
    language: Option<LanguageId>,
}

/// Run the detect command. Fails if any filename is unsupported.
pub fn run_detect(args: &DetectArgs) -> anyhow::Result<i32> {
    check_format(&args.format)?;

    let detections: Vec<Detection> = args
        .filenames
        .iter()
        .map(|filename| Detection {
            filename,
            language: detect_language(filename),
        })
        .collect();

    match args.format.as_str() {
        "json" => report::write_json(&detections)?,
        _ => {
            for d in &detections {
                match d.language {
                    Some(language) => println!("{}\t{}", d.filename, language.to_string().green()),
                    None => println!("{}\t{}", d.filename, "unsupported".red()),
                }
            }
        }
    }

    if detections.iter().any(|d| d.language.is_none()) {
        return Ok(EXIT_FAILED);
    }
    Ok(EXIT_SUCCESS)
}

/// Run the hash command.
pub fn run_hash(args: &HashArgs) -> anyhow::Result<i32> {
    let source = read_source(&args.file)?;
    println!("{}  {}", content_hash(&source), args.file.display());
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_args() {
        let cli = Cli::try_parse_from([
            "codelens",
            "scan",
            "src",
            "--format",
            "json",
            "--max-files",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.path, PathBuf::from("src"));
                assert_eq!(args.format, "json");
                assert_eq!(args.max_files, Some(5));
                assert!(!args.show_skipped);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_check_format() {
        assert!(check_format("json").is_ok());
        assert!(check_format("pretty").is_ok());
        assert!(check_format("sarif").is_err());
    }

    #[test]
    fn test_detect_requires_filenames() {
        assert!(Cli::try_parse_from(["codelens", "detect"]).is_err());
    }
}
