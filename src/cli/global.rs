// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options not tied to the vault or the report.
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to trace)
//! --log-file FILE   ← Enables file logging
//! --isolated        ← Load into an in-memory copy of the environment
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub log_level: Option<u8>,

    /// File log level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Loads secrets into an in-memory copy of the environment instead of
    /// the process environment.
    #[arg(long)]
    pub isolated: bool,
}

impl GlobalOptions {
    /// Writes the options given on the command line into `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(level) = self.log_level.and_then(LogLevel::from_u8) {
            config.global.log_level = level;
        }
        if let Some(level) = self.file_log_level.and_then(LogLevel::from_u8) {
            config.global.file_log_level = level;
        }
        if let Some(path) = &self.log_file {
            config.global.log_file = Some(path.clone());
        }
    }
}
