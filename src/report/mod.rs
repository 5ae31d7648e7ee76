// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rendering of the loaded environment.
//!
//! ```text
//! Env snapshot
//!     |
//!     v
//! Exclusions (prefixes + exact keys)
//!     |
//!     v
//! sorted KEY=VALUE lines  (value masked if mask_values)
//!     |
//!     +-- none left --> "No secrets found" + push hint
//! ```


use bon::Builder;
use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::config::types::ReportConfig;
use crate::core::env::container::Env;

/// Prefixes hidden by default: the Rust toolchain and this tool's own config.
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["CARGO_", "RUST_", "VAULTARQ_ENV_"];

/// Common system variables hidden by default.
pub const DEFAULT_EXCLUDED_KEYS: &[&str] = &["PATH", "PWD", "HOME", "SHELL", "USER", "LANG", "TERM"];

/// Printed instead of values when masking.
pub const MASK: &str = "********";

/// Deny-list of variables that are not shown in the report.
///
/// Matching is case-sensitive, except on Windows where variable names are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusions {
    prefixes: Vec<String>,
    keys: BTreeSet<String>,
}

impl Default for Exclusions {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_PREFIXES.iter().copied(),
            DEFAULT_EXCLUDED_KEYS.iter().copied(),
        )
    }
}

impl Exclusions {
    pub fn new<P, K>(prefixes: P, keys: K) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(|p| normalize(p.into())).collect(),
            keys: keys.into_iter().map(|k| normalize(k.into())).collect(),
        }
    }

    /// An empty deny-list: every variable is shown.
    #[must_use]
    pub fn none() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(normalize(prefix.into()));
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.keys.insert(normalize(key.into()));
        self
    }

    /// Returns true if `key` must not be shown.
    #[must_use]
    pub fn is_excluded(&self, key: &str) -> bool {
        let key = normalize(key.to_string());
        self.keys.contains(&key) || self.prefixes.iter().any(|p| key.starts_with(p.as_str()))
    }
}

#[cfg(windows)]
fn normalize(key: String) -> String {
    key.to_ascii_uppercase()
}

#[cfg(not(windows))]
const fn normalize(key: String) -> String {
    key
}

/// How the report is filtered and printed.
#[derive(Debug, Clone, Builder)]
pub struct ReportOptions {
    #[builder(default)]
    exclusions: Exclusions,
    #[builder(default = false)]
    only_loaded: bool,
    #[builder(default = false)]
    mask_values: bool,
    #[builder(default = false)]
    quiet: bool,
    #[builder(into, default = "vaultarq".to_string())]
    tool_name: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ReportOptions {
    /// Builds options from the `[report]` section.
    #[must_use]
    pub fn from_config(report: &ReportConfig, tool_name: &str) -> Self {
        Self::builder()
            .exclusions(Exclusions::new(
                report.exclude_prefixes.iter().cloned(),
                report.exclude_keys.iter().cloned(),
            ))
            .only_loaded(report.only_loaded)
            .mask_values(report.mask_values)
            .quiet(report.quiet)
            .tool_name(tool_name)
            .build()
    }

    #[must_use]
    pub const fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    #[must_use]
    pub const fn only_loaded(&self) -> bool {
        self.only_loaded
    }

    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    #[must_use]
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }
}

/// Returns the entries of `env` that survive `exclusions`, sorted by key.
#[must_use]
pub fn visible_entries<'a>(env: &'a Env, exclusions: &Exclusions) -> Vec<(&'a str, &'a str)> {
    let mut entries: Vec<_> = env
        .iter()
        .filter(|(key, _)| !exclusions.is_excluded(key))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Prints the report for `env` and returns the number of variables shown.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report<W: Write + ?Sized>(env: &Env, options: &ReportOptions, out: &mut W) -> io::Result<usize> {
    let entries = visible_entries(env, options.exclusions());

    if !options.quiet {
        writeln!(out, "\nLoaded environment variables:")?;
    }

    for (key, value) in &entries {
        let value = if options.mask_values { MASK } else { value };
        writeln!(out, "{key}={value}")?;
    }

    if options.quiet {
        return Ok(entries.len());
    }

    if entries.is_empty() {
        writeln!(out, "No secrets found in Vaultarq vault.")?;
        writeln!(
            out,
            "Try adding some with: {} push API_KEY=my-secret-key",
            options.tool_name
        )?;
    } else {
        writeln!(out, "\nExample use:")?;
        writeln!(out, "-----------------------------")?;
        writeln!(out, "In your application, you can now access these variables using:")?;
        writeln!(out, "std::env::var(\"API_KEY\").unwrap_or_default()")?;
    }

    Ok(entries.len())
}
