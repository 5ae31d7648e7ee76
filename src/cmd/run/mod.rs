// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The check itself: probe, load, report.
//!
//! ```text
//! Start
//!   |
//!   v
//! CheckAvailability --false--> Err(Unavailable)
//!   |
//!   v
//! Load --Ok(false)--> Err(LoadFailed)
//!   |  --Err(e)-----> Err(Integration(e))
//!   v
//! Report --> Ok(Reported(n)) | Ok(NoSecrets)
//! ```

#[cfg(test)]
mod tests;

use std::io::Write;
use tracing::{debug, info};

use crate::core::env::store::EnvironmentStore;
use crate::error::{VaultEnvError, VaultEnvResult};
use crate::report::{ReportOptions, report};
use crate::vault::VaultTool;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// This many variables were printed.
    Reported(usize),
    /// Nothing was left to print after filtering.
    NoSecrets,
}

/// Exit status for the result of [`run`]: 0 when the check succeeded,
/// including an empty report, and 1 on any failure.
#[must_use]
pub const fn exit_status(result: &VaultEnvResult<Outcome>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Runs the check against `vault`, loading into `store` and writing the
/// report to `out`.
///
/// `load_env` is only called once `is_available` returned true, and nothing
/// from the environment is printed unless loading succeeded.
///
/// # Errors
///
/// - [`VaultEnvError::Unavailable`] if the tool cannot be started.
/// - [`VaultEnvError::LoadFailed`] if the tool reported a failure.
/// - [`VaultEnvError::Integration`] if the load could not complete.
/// - [`VaultEnvError::Io`] if writing to `out` fails.
pub async fn run<V, W>(
    vault: &V,
    store: &mut dyn EnvironmentStore,
    options: &ReportOptions,
    out: &mut W,
) -> VaultEnvResult<Outcome>
where
    V: VaultTool,
    W: Write + ?Sized,
{
    let verbose = !options.quiet();

    if verbose {
        writeln!(out, "Checking if Vaultarq is installed...")?;
    }
    if !vault.is_available().await {
        return Err(VaultEnvError::unavailable(vault.name()));
    }
    if verbose {
        writeln!(out, "✅ Vaultarq is installed")?;
        writeln!(out, "Loading secrets into environment variables...")?;
    }

    let before = store.snapshot();
    if !vault.load_env(store).await? {
        return Err(VaultEnvError::load_failed(vault.name()));
    }
    if verbose {
        writeln!(out, "✅ Secrets loaded successfully")?;
    }

    let after = store.snapshot();
    let shown = if options.only_loaded() {
        after.changed_since(&before)
    } else {
        after
    };
    debug!(variables = shown.len(), "reporting environment");

    let count = report(&shown, options, out)?;
    info!(count, "reported variables");
    Ok(if count == 0 {
        Outcome::NoSecrets
    } else {
        Outcome::Reported(count)
    })
}
