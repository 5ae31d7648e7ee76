// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The vault collaborator.
//!
//! ```text
//! VaultTool (trait)
//!   name()
//!   is_available()  -> bool
//!   load_env(store) -> Ok(true) | Ok(false) | Err(IntegrationError)
//!     |
//!     +-- VaultarqCli   drives the `vaultarq` executable
//!     +-- test doubles  scripted answers
//! ```

pub mod cli;
pub mod export;

#[cfg(test)]
mod tests;

pub use crate::config::types::ExportFormat;
pub use cli::VaultarqCli;

use crate::core::env::store::EnvironmentStore;
use crate::error::IntegrationError;

/// An external secrets tool that can inject variables into an environment.
#[allow(async_fn_in_trait)]
pub trait VaultTool {
    /// Name of the tool as shown to the user.
    fn name(&self) -> &str;

    /// Returns true if the tool is installed and can be started.
    ///
    /// Never fails: every problem means "not available".
    async fn is_available(&self) -> bool;

    /// Loads the vault's secrets into `store`.
    ///
    /// Returns `Ok(false)` when the tool ran but reported a failure, such as
    /// an uninitialized vault.
    ///
    /// # Errors
    ///
    /// Returns an [`IntegrationError`] when the call itself cannot complete.
    async fn load_env(&self, store: &mut dyn EnvironmentStore) -> Result<bool, IntegrationError>;
}
