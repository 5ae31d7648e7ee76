// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for vaultarq-env using clap derive.
//!
//! # Option Groups
//!
//! ```text
//! vaultarq-env [global options] [vault options] [report options]
//!   global   --config --log-level --file-log-level --log-file --isolated
//!   vault    --bin-path --environment --format --timeout
//!   report   --exclude --exclude-prefix --no-default-excludes
//!            --only-loaded --mask --quiet
//! ```
//!
//! Flags given here override every configuration source.

pub mod global;
pub mod report;
pub mod vault;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::report::ReportArgs;
use crate::cli::vault::VaultArgs;
use crate::config::Config;
use clap::Parser;

/// Vaultarq environment loader check
///
/// Verifies that Vaultarq is installed, loads the secrets of the current
/// vault into the environment and prints them.
#[derive(Debug, Parser)]
#[command(
    name = "vaultarq-env",
    author,
    version,
    about = "Checks Vaultarq and prints the secrets it loads",
    long_about = "vaultarq-env Copyright (C) 2026 Vaultarq Contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Checks that Vaultarq is installed, loads the secrets of the\n\
                  current vault into the environment and prints them, minus\n\
                  common system variables. Exits with 1 if any step fails.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `vaultarq-env.toml` in the current\n\
                  directory if present, then from each --config file, then from\n\
                  VAULTARQ_ENV_<SECTION>__<KEY> environment variables, e.g.\n\
                  VAULTARQ_ENV_VAULT__FORMAT=json. Command-line flags win over all\n\
                  of them."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten, next_help_heading = "Vault")]
    pub vault: VaultArgs,

    #[command(flatten, next_help_heading = "Report")]
    pub report: ReportArgs,
}

impl Cli {
    /// Writes every flag given on the command line into `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        self.global.apply_overrides(config);
        self.vault.apply_overrides(config);
        self.report.apply_overrides(config);
    }
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
