// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: set/get/apply(EnvDelta)/changed_since
//! EnvironmentStore: ProcessEnvStore | MemoryEnvStore
//! ```
//!
//! - **Deterministic order**: iteration is sorted by key
//! - **Copy-on-write**: clones share data until modified
//! - **UTF-8 internal**: non-UTF-8 process variables are converted lossily

pub mod container;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect()
}
