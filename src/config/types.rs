// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for vaultarq-env.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, VaultConfig, ReportConfig
//! ExportFormat: Bash (default) | Dotenv | Json
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Output format requested from `vaultarq export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `export KEY="VALUE"` lines
    #[default]
    Bash,
    /// `KEY=VALUE` lines
    Dotenv,
    /// a single JSON object
    Json,
}

impl ExportFormat {
    /// Returns the `vaultarq export` flag for this format.
    #[must_use]
    pub const fn as_arg(self) -> &'static str {
        match self {
            Self::Bash => "--bash",
            Self::Dotenv => "--dotenv",
            Self::Json => "--json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bash => write!(f, "bash"),
            Self::Dotenv => write!(f, "dotenv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Self::Bash),
            "dotenv" => Ok(Self::Dotenv),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                section: "vault".to_string(),
                key: "format".to_string(),
                message: format!("expected 'bash', 'dotenv', or 'json', got '{s}'"),
            }),
        }
    }
}

/// Global configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// Log file level (0-5).
    pub file_log_level: LogLevel,
    /// Log file path; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// How to reach and drive the Vaultarq executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaultConfig {
    /// Executable name (looked up on PATH) or path.
    pub bin_path: String,
    /// Vault environment to `link` before exporting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Export format.
    pub format: ExportFormat,
    /// Kill a vault command after this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            bin_path: "vaultarq".to_string(),
            environment: None,
            format: ExportFormat::Bash,
            timeout_secs: None,
        }
    }
}

impl VaultConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Name used for the tool in messages: the file name of `bin_path`.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        std::path::Path::new(&self.bin_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.bin_path)
    }

    pub(super) fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.bin_path.trim().is_empty() {
            return Err(invalid("vault", "bin_path", "must not be empty"));
        }
        if self.environment.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(invalid("vault", "environment", "must not be empty when set"));
        }
        if self.timeout_secs == Some(0) {
            return Err(invalid("vault", "timeout_secs", "must be at least 1"));
        }
        Ok(())
    }
}

/// Which variables the report shows and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Keys starting with any of these prefixes are hidden.
    pub exclude_prefixes: Vec<String>,
    /// Keys equal to any of these are hidden.
    pub exclude_keys: Vec<String>,
    /// Only show keys the load added or changed.
    pub only_loaded: bool,
    /// Replace values with a fixed mask.
    pub mask_values: bool,
    /// Print bare `KEY=VALUE` lines only.
    pub quiet: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            exclude_prefixes: crate::report::DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
            exclude_keys: crate::report::DEFAULT_EXCLUDED_KEYS
                .iter()
                .map(ToString::to_string)
                .collect(),
            only_loaded: false,
            mask_values: false,
            quiet: false,
        }
    }
}

impl ReportConfig {
    pub(super) fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.exclude_prefixes.iter().any(String::is_empty) {
            return Err(invalid(
                "report",
                "exclude_prefixes",
                "an empty prefix would hide every variable",
            ));
        }
        Ok(())
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
