use crate::config::toml_config::TomlConfig;
use crate::config::{LogFormat, PatchSettings, WriteMode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "subregion-patcher")]
#[command(about = "Reassign placeholder subregions in a countries JSON file")]
pub struct CliConfig {
    /// Path to the countries JSON file (array of objects)
    #[arg(env = "INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How the rewritten file replaces the original
    #[arg(long, value_enum)]
    pub write_mode: Option<WriteMode>,

    /// Report the updates without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log CPU and memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// Merges command-line values over the optional TOML file.
    pub fn resolve(&self) -> Result<PatchSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        self.merge(&file)
    }

    pub fn merge(&self, file: &TomlConfig) -> Result<PatchSettings> {
        let input_path = self
            .input_file
            .clone()
            .or_else(|| file.input_path().map(PathBuf::from));
        let input_path = validate_required_field("input_file", &input_path)?.clone();

        let settings = PatchSettings {
            input_path,
            write_mode: self.write_mode.or(file.write_mode()).unwrap_or_default(),
            dry_run: self.dry_run || file.dry_run().unwrap_or(false),
            monitor: self.monitor || file.monitor().unwrap_or(false),
            verbose: self.verbose,
            log_format: self.log_format.or(file.log_format()).unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}
