//! Scan configuration.
//!
//! Read from `codelens.yaml` (or `.codelens.yaml`) at the scan root, or from
//! an explicit `--config` file. Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

/// Files looked for by [`ScanConfig::discover`], in order.
pub const CONFIG_FILENAMES: &[&str] = &["codelens.yaml", ".codelens.yaml"];

pub const DEFAULT_MAX_FILE_SIZE: u64 = 500_000;
pub const DEFAULT_MAX_FILES: usize = 100;

/// Build output, dependency and virtualenv directories.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    "dist",
    "build",
    "target",
    "venv",
    "env",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Files larger than this many bytes are skipped.
    pub max_file_size: u64,
    /// Stop accepting files after this many.
    pub max_files: usize,
    /// Directory names pruned wherever they appear.
    pub skip_dirs: Vec<String>,
    /// Glob patterns (relative to the scan root) for paths to skip, e.g. `**/generated/**`.
    pub exclude: Vec<String>,
    /// Worker threads for analysis. Defaults to the number of CPUs.
    pub concurrency: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_files: DEFAULT_MAX_FILES,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
            concurrency: None,
        }
    }
}

impl ScanConfig {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: ScanConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Find and parse a config file in `dir`, if there is one.
    pub fn discover(dir: &Path) -> anyhow::Result<Option<Self>> {
        match Self::find(dir) {
            Some(path) => Self::parse_file(path).map(Some),
            None => Ok(None),
        }
    }

    fn find(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILENAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Reject limits that would make every scan empty, and malformed globs.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_file_size == 0 {
            bail!("max_file_size must be greater than 0");
        }
        if self.max_files == 0 {
            bail!("max_files must be greater than 0");
        }
        if self.concurrency == Some(0) {
            bail!("concurrency must be greater than 0");
        }
        self.exclude_matcher()?;
        Ok(())
    }

    /// Compile the exclude patterns into one matcher.
    pub fn exclude_matcher(&self) -> anyhow::Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob =
                Glob::new(pattern).with_context(|| format!("invalid exclude pattern {:?}", pattern))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Check if a directory name is pruned from the walk.
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|d| d == name)
    }

    /// Worker threads to use for analysis.
    pub fn worker_count(&self) -> usize {
        self.concurrency.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}
