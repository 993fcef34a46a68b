use crate::config::{LogFormat, WriteMode};
use crate::utils::error::{PatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional run configuration file. Every section may be omitted.
///
/// ```toml
/// [input]
/// path = "public/countries_simplified.json"
///
/// [output]
/// write_mode = "atomic"
///
/// [run]
/// dry_run = false
///
/// [monitoring]
/// enabled = true
/// log_format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub run: Option<RunConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub write_mode: Option<WriteMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: Option<bool>,
    pub log_format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PatchError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PatchError::ConfigError {
            message: format!("Failed to parse TOML: {}", e),
        })
    }

    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_ref().map(|input| input.path.as_path())
    }

    pub fn write_mode(&self) -> Option<WriteMode> {
        self.output.as_ref().and_then(|output| output.write_mode)
    }

    pub fn dry_run(&self) -> Option<bool> {
        self.run.as_ref().and_then(|run| run.dry_run)
    }

    pub fn monitor(&self) -> Option<bool> {
        self.monitoring.as_ref().and_then(|m| m.enabled)
    }

    pub fn log_format(&self) -> Option<LogFormat> {
        self.monitoring.as_ref().and_then(|m| m.log_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_str(
            r#"
[input]
path = "data/countries.json"

[output]
write_mode = "direct"

[run]
dry_run = true

[monitoring]
enabled = true
log_format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.input_path(), Some(Path::new("data/countries.json")));
        assert_eq!(config.write_mode(), Some(WriteMode::Direct));
        assert_eq!(config.dry_run(), Some(true));
        assert_eq!(config.monitor(), Some(true));
        assert_eq!(config.log_format(), Some(LogFormat::Json));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.input_path(), None);
        assert_eq!(config.write_mode(), None);
    }

    #[test]
    fn test_unknown_write_mode_is_rejected() {
        let err = TomlConfig::from_str("[output]\nwrite_mode = \"yolo\"\n").unwrap_err();
        assert!(matches!(err, PatchError::ConfigError { .. }));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PatchError::ConfigError { .. }));
    }
}
