// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for vaultarq-env.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. vaultarq-env.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. VAULTARQ_ENV_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VAULTARQ_ENV_VAULT__BIN_PATH=/opt/vq   → vault.bin_path = "/opt/vq"
//! VAULTARQ_ENV_VAULT__FORMAT=json        → vault.format = "json"
//! VAULTARQ_ENV_REPORT__EXCLUDE_KEYS=A,B  → report.exclude_keys = ["A", "B"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, ReportConfig, VaultConfig};

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "vaultarq-env.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "VAULTARQ_ENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Vault executable options.
    pub vault: VaultConfig,
    /// Report options.
    pub report: ReportConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vaultarq_env::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("vaultarq-env.toml")
    ///     .with_env_prefix("VAULTARQ_ENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.vault.validate()?;
        self.report.validate()
    }
}
