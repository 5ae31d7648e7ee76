// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options for reaching the Vaultarq executable.

use clap::Args;

use crate::config::Config;
use crate::config::types::ExportFormat;

/// Environment variable naming the vault executable.
pub const BIN_PATH_ENV: &str = "VAULTARQ_BIN";

#[derive(Debug, Clone, Default, Args)]
pub struct VaultArgs {
    /// Vaultarq executable, a name looked up on PATH or a path.
    #[arg(short = 'b', long = "bin-path", value_name = "PATH", env = BIN_PATH_ENV)]
    pub bin_path: Option<String>,

    /// Vault environment to link before exporting.
    #[arg(short = 'e', long = "environment", value_name = "NAME")]
    pub environment: Option<String>,

    /// Export format requested from the vault.
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Kills a vault command that runs longer than this many seconds.
    #[arg(long = "timeout", value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl VaultArgs {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(bin_path) = &self.bin_path {
            config.vault.bin_path.clone_from(bin_path);
        }
        if let Some(environment) = &self.environment {
            config.vault.environment = Some(environment.clone());
        }
        if let Some(format) = self.format {
            config.vault.format = format;
        }
        if let Some(timeout) = self.timeout {
            config.vault.timeout_secs = Some(timeout);
        }
    }
}
