// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options shaping the printed report.
//!
//! ```text
//! --no-default-excludes   ← clear configured prefixes and keys first
//! --exclude KEY           ← then add keys (can repeat)
//! --exclude-prefix P      ← then add prefixes (can repeat)
//! ```

use clap::Args;

use crate::config::Config;

#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// Hides a variable from the report. Can be specified multiple times.
    #[arg(short = 'x', long = "exclude", value_name = "KEY", action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Hides every variable starting with PREFIX. Can be specified multiple times.
    #[arg(long = "exclude-prefix", value_name = "PREFIX", action = clap::ArgAction::Append)]
    pub exclude_prefix: Vec<String>,

    /// Starts from an empty deny-list instead of the configured one.
    #[arg(long = "no-default-excludes")]
    pub no_default_excludes: bool,

    /// Reports only variables the load added or changed.
    #[arg(long = "only-loaded")]
    pub only_loaded: bool,

    /// Prints `********` instead of values.
    #[arg(long = "mask")]
    pub mask: bool,

    /// Prints only `KEY=VALUE` lines.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl ReportArgs {
    pub fn apply_overrides(&self, config: &mut Config) {
        let report = &mut config.report;
        if self.no_default_excludes {
            report.exclude_keys.clear();
            report.exclude_prefixes.clear();
        }
        report.exclude_keys.extend(self.exclude.iter().cloned());
        report.exclude_prefixes.extend(self.exclude_prefix.iter().cloned());
        report.only_loaded |= self.only_loaded;
        report.mask_values |= self.mask;
        report.quiet |= self.quiet;
    }
}
