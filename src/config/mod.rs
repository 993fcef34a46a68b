#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const BACKUP_SUFFIX: &str = ".backup";

/// How the rewritten collection reaches the input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Stage in a temp file, move the original to the backup, rename the temp file into place.
    #[default]
    Atomic,
    /// Move the original to the backup, then write the input path in place.
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// `<path>.backup`, with the suffix appended to the full file name.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSettings {
    pub input_path: PathBuf,
    pub write_mode: WriteMode,
    pub dry_run: bool,
    pub monitor: bool,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl PatchSettings {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            write_mode: WriteMode::default(),
            dry_run: false,
            monitor: false,
            verbose: false,
            log_format: LogFormat::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn backup_path(&self) -> PathBuf {
        backup_path_for(&self.input_path)
    }
}

impl Validate for PatchSettings {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_path)?;
        validate_distinct_paths("backup_path", &self.backup_path(), &self.input_path)?;
        Ok(())
    }
}

impl ConfigProvider for PatchSettings {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn monitor(&self) -> bool {
        self.monitor
    }
}
