// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_LOG_LEVEL;
use crate::errors::{AlsError, AlsResult, ConfigError, ErrorDetails};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Main application configuration.
///
/// Loaded from a YAML or TOML file. Every section is optional and falls back
/// to its defaults, so an empty file is a valid configuration.
///
/// # Fields
/// * `logging` - Log level, output format and destination
/// * `paths` - Folders a live stacking session depends on
///
/// # Example
/// ```yaml
/// logging:
///   level: debug
///   format: compact
///   with_target: true
/// paths:
///   scan_folder: /home/astro/captures
///   work_folder: /home/astro/als
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LogConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Logging configuration.
///
/// # Fields
/// * `level` - One of trace, debug, info, warn, error (defaults to info)
/// * `format` - Output format (defaults to pretty)
/// * `with_target` - Print the module path of each record
/// * `with_timestamps` - Print a timestamp on each record
/// * `with_ansi` - Colorize output
/// * `log_file` - Append records to this file instead of stderr
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
    pub with_target: bool,
    pub with_timestamps: bool,
    pub with_ansi: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
            with_target: true,
            with_timestamps: false,
            with_ansi: true,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Parse the configured level into a `tracing` level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.level
            .trim()
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable multi-field format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Folders a session cannot run without.
///
/// # Fields
/// * `scan_folder` - Folder watched for new frames
/// * `work_folder` - Folder receiving stacking results and web content
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PathsConfig {
    pub scan_folder: Option<PathBuf>,
    pub work_folder: Option<PathBuf>,
}

impl PathsConfig {
    /// Check that every configured folder exists.
    ///
    /// Unset folders are skipped. The first missing one is reported as
    /// [`ErrorDetails::CriticalFolderMissing`].
    pub fn verify_critical_folders(&self) -> AlsResult<()> {
        crate::try_logged!(
            "PathsConfig::verify_critical_folders",
            (&self.scan_folder, &self.work_folder),
            {
                let folders = [
                    ("Scan folder", &self.scan_folder),
                    ("Work folder", &self.work_folder),
                ];

                folders
                    .into_iter()
                    .filter_map(|(role, folder)| folder.as_ref().map(|folder| (role, folder)))
                    .find(|(_, folder)| !folder.is_dir())
                    .map_or(Ok(()), |(role, folder)| {
                        Err(AlsError::new(
                            format!("{} is missing", role),
                            ErrorDetails::CriticalFolderMissing {
                                folder: folder.clone(),
                            },
                        ))
                    })
            }
        )
    }
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse configuration text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg: Config = match format {
        ConfigFormat::Yaml if content.trim().is_empty() => Config::default(),
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, format)
}

/// Load and validate a config file
///
/// On top of parsing, this checks the values serde cannot check by itself,
/// such as the log level.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    cfg.logging.level()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_yaml_config() {
        let yaml = r#"
logging:
  level: debug
  format: json
  with_ansi: false
paths:
  scan_folder: /tmp/scan
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.logging.level().unwrap(), Level::DEBUG);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert!(!cfg.logging.with_ansi);
        assert!(cfg.logging.with_target);
        assert_eq!(cfg.paths.scan_folder, Some(PathBuf::from("/tmp/scan")));
        assert_eq!(cfg.paths.work_folder, None);
    }

    #[test]
    fn parse_basic_toml_config() {
        let toml = r#"
[logging]
level = "warn"
format = "compact"
with_timestamps = true
"#;

        let cfg = parse_config(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.logging.level().unwrap(), Level::WARN);
        assert_eq!(cfg.logging.format, LogFormat::Compact);
        assert!(cfg.logging.with_timestamps);
        assert_eq!(cfg.paths, PathsConfig::default());
    }

    #[test]
    fn empty_files_use_defaults() {
        assert_eq!(parse_config("", ConfigFormat::Yaml).unwrap(), Config::default());
        assert_eq!(parse_config("", ConfigFormat::Toml).unwrap(), Config::default());
        assert_eq!(Config::default().logging.level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config(".yml", "logging:\n  level: trace\n");

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.logging.level().unwrap(), Level::TRACE);
    }

    #[test]
    fn test_load_and_validate_rejects_unknown_level() {
        let file = write_config(".toml", "[logging]\nlevel = \"chatty\"\n");

        let err = load_and_validate_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "chatty"));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = write_config(".ini", "level=debug");

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = load_config("/definitely/not/here/als.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/als.yaml"));
    }

    #[test]
    fn test_load_reports_malformed_yaml() {
        let file = write_config(".yaml", "logging: [unclosed\n");

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_verify_critical_folders() {
        let scan = TempDir::new().unwrap();
        let mut paths = PathsConfig {
            scan_folder: Some(scan.path().to_path_buf()),
            work_folder: None,
        };
        assert!(paths.verify_critical_folders().is_ok());

        let missing = scan.path().join("does-not-exist");
        paths.work_folder = Some(missing.clone());
        let err = paths.verify_critical_folders().unwrap_err();

        assert_eq!(err.message(), "Work folder is missing");
        assert_eq!(
            err.details(),
            &ErrorDetails::CriticalFolderMissing { folder: missing }
        );
    }
}
