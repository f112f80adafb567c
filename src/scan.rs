//! Directory scan: find analyzable files and analyze them in parallel.
//!
//! Collection is sequential and deterministic (entries sorted by name) so the
//! file-count limit always keeps the same files. Analysis fans out over a
//! rayon pool sized by [`ScanConfig::worker_count`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::GlobSet;
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::analyzer::Analyzer;
use crate::config::ScanConfig;
use crate::hash::content_hash;
use crate::language::{detect_language, LanguageId};
use crate::summary::StructuralSummary;

/// Why a file (or pruned directory) was not analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Hidden,
    Excluded,
    Unsupported,
    Empty,
    TooLarge,
    Unreadable,
    Limit,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipReason::Hidden => "hidden",
            SkipReason::Excluded => "excluded",
            SkipReason::Unsupported => "unsupported",
            SkipReason::Empty => "empty",
            SkipReason::TooLarge => "too large",
            SkipReason::Unreadable => "unreadable",
            SkipReason::Limit => "over file limit",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path relative to the scan root.
    pub path: String,
    pub reason: SkipReason,
}

/// Analysis result for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to the scan root.
    pub path: String,
    pub language: LanguageId,
    pub content_hash: String,
    /// Size in bytes.
    pub size: u64,
    pub summary: StructuralSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub root: String,
    pub files: Vec<FileReport>,
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    pub fn function_count(&self) -> usize {
        self.files.iter().map(|f| f.summary.functions.len()).sum()
    }

    pub fn class_count(&self) -> usize {
        self.files.iter().map(|f| f.summary.classes.len()).sum()
    }

    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|f| f.summary.summary.total_lines).sum()
    }
}

/// A file accepted for analysis, already read into memory.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    /// Path relative to the scan root.
    pub relative: String,
    pub language: LanguageId,
    pub size: u64,
    pub source: String,
}

/// Walks a directory tree and analyzes every supported file in it.
pub struct Scanner {
    config: ScanConfig,
    exclude: GlobSet,
    progress: Option<ProgressBar>,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let exclude = config.exclude_matcher()?;
        Ok(Self {
            config,
            exclude,
            progress: None,
        })
    }

    /// Report analysis progress on `bar`. Its length is set once collection
    /// finishes.
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk `root` and read every file that passes the filters and limits.
    pub fn collect(&self, root: &Path) -> anyhow::Result<(Vec<Candidate>, Vec<SkippedFile>)> {
        let mut candidates = Vec::new();
        let mut skipped = Vec::new();
        let mut skip = |relative: &str, reason: SkipReason| {
            debug!(path = relative, %reason, "skipping");
            skipped.push(SkippedFile {
                path: relative.to_string(),
                reason,
            });
        };

        let mut walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(err).with_context(|| format!("cannot scan {}", root.display()));
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            let relative = relative_path(root, path);
            let name = entry.file_name().to_string_lossy();

            if entry.file_type().is_dir() {
                if name.starts_with('.') {
                    skip(&relative, SkipReason::Hidden);
                    walker.skip_current_dir();
                } else if self.config.is_skipped_dir(&name) || self.exclude.is_match(&relative) {
                    skip(&relative, SkipReason::Excluded);
                    walker.skip_current_dir();
                }
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            if name.starts_with('.') {
                skip(&relative, SkipReason::Hidden);
                continue;
            }
            if self.exclude.is_match(&relative) {
                skip(&relative, SkipReason::Excluded);
                continue;
            }
            let Some(language) = detect_language(&name) else {
                skip(&relative, SkipReason::Unsupported);
                continue;
            };

            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    warn!(path = %relative, error = %err, "cannot stat file");
                    skip(&relative, SkipReason::Unreadable);
                    continue;
                }
            };
            if size > self.config.max_file_size {
                skip(&relative, SkipReason::TooLarge);
                continue;
            }
            if candidates.len() >= self.config.max_files {
                skip(&relative, SkipReason::Limit);
                continue;
            }

            let source = match fs::read_to_string(path) {
                Ok(source) => source,
                Err(err) => {
                    warn!(path = %relative, error = %err, "cannot read file");
                    skip(&relative, SkipReason::Unreadable);
                    continue;
                }
            };
            if source.trim().is_empty() {
                skip(&relative, SkipReason::Empty);
                continue;
            }

            candidates.push(Candidate {
                path: path.to_path_buf(),
                relative,
                language,
                size,
                source,
            });
        }

        Ok((candidates, skipped))
    }

    /// Collect and analyze every file under `root`.
    pub fn scan(&self, root: &Path) -> anyhow::Result<ScanReport> {
        let (candidates, skipped) = self.collect(root)?;
        info!(
            accepted = candidates.len(),
            skipped = skipped.len(),
            root = %root.display(),
            "collected files"
        );

        if let Some(bar) = &self.progress {
            bar.set_length(candidates.len() as u64);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.worker_count())
            .build()
            .context("failed to start analysis workers")?;

        let mut files = pool.install(|| {
            candidates
                .par_iter()
                .map(|candidate| self.analyze_candidate(candidate))
                .collect::<anyhow::Result<Vec<_>>>()
        })?;
        files.sort_by(|a, b| a.path.cmp(&b.path));

        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }
        info!(files = files.len(), "scan complete");

        Ok(ScanReport {
            root: root.display().to_string(),
            files,
            skipped,
        })
    }

    fn analyze_candidate(&self, candidate: &Candidate) -> anyhow::Result<FileReport> {
        let analyzer = Analyzer::new(candidate.language)?;
        let summary = analyzer.analyze(&candidate.source);

        if let Some(bar) = &self.progress {
            bar.inc(1);
        }

        Ok(FileReport {
            path: candidate.relative.clone(),
            language: candidate.language,
            content_hash: content_hash(&candidate.source),
            size: candidate.size,
            summary,
        })
    }
}

/// `path` relative to `root` with `/` separators.
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
