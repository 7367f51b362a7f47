//! Configuration for liveterm.
//!
//! Settings are read from `~/.liveterm/config.toml`. Every section and key
//! is optional:
//!
//! ```toml
//! [render]
//! indent = "\t"          # prefix for list items
//!
//! [log]
//! level = "info"         # overridden by RUST_LOG
//!
//! [demo]
//! packages = 3
//! tests_per_package = 4
//! step_ms = 120
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub log: LogConfig,
    pub demo: DemoConfig,
}

/// Document rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Indentation unit placed before every list item line
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is not set
    pub level: String,
    /// Log file; defaults to `~/.liveterm/liveterm.log`
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Simulated test run driven by the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub packages: usize,
    pub tests_per_package: usize,
    /// Delay between simulated events, in milliseconds
    pub step_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            packages: 3,
            tests_per_package: 4,
            step_ms: 120,
        }
    }
}

impl Config {
    /// Load the user configuration, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {:#}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Directory holding the config and log files
    pub fn data_dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".liveterm"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join("config.toml"))
    }

    /// Log file path, creating its directory if needed
    pub fn log_path(&self) -> PathBuf {
        let path = self.log.file.clone().unwrap_or_else(|| {
            Self::data_dir()
                .map(|dir| dir.join("liveterm.log"))
                .unwrap_or_else(|| PathBuf::from("liveterm.log"))
        });
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        path
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.indent, "\t");
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            [render]
            indent = "  "

            [demo]
            step_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.render.indent, "  ");
        assert_eq!(config.demo.step_ms, 0);
        assert_eq!(config.demo.packages, 3);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_invalid_types_are_rejected() {
        assert!(Config::from_toml("[demo]\npackages = \"many\"").is_err());
    }
}
