// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The seam between loaders and the environment they populate.
//!
//! ```text
//! EnvironmentStore
//!   snapshot() -> Env
//!   apply(&EnvDelta)
//!     |
//!     +-- ProcessEnvStore   std::env (the real process)
//!     +-- MemoryEnvStore    owned Env (tests, --isolated)
//! ```

use tracing::warn;

use super::container::Env;
use super::current_env;
use super::types::{EnvDelta, is_valid_key, is_valid_value};

/// A mutable environment mapping that loaders write into.
pub trait EnvironmentStore {
    /// Returns a point-in-time copy of the mapping.
    fn snapshot(&self) -> Env;

    /// Inserts or overwrites every assignment of `delta`.
    fn apply(&mut self, delta: &EnvDelta);
}

/// The environment of the running process.
#[derive(Debug)]
pub struct ProcessEnvStore {
    _private: (),
}

impl ProcessEnvStore {
    /// Creates a handle on the process environment.
    ///
    /// # Safety
    ///
    /// [`EnvironmentStore::apply`] calls [`std::env::set_var`]. The caller
    /// must ensure no other thread reads or writes the environment while a
    /// store created here is in use.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvironmentStore for ProcessEnvStore {
    fn snapshot(&self) -> Env {
        current_env()
    }

    fn apply(&mut self, delta: &EnvDelta) {
        for (key, value) in delta.iter() {
            if !is_valid_key(key) || !is_valid_value(value) {
                warn!(key = %key.escape_debug(), "skipping variable the platform cannot store");
                continue;
            }
            // SAFETY: guaranteed by the contract of `ProcessEnvStore::new`.
            unsafe { std::env::set_var(key, value) };
        }
    }
}

/// An environment held in memory, isolated from the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvStore {
    env: Env,
}

impl MemoryEnvStore {
    #[must_use]
    pub const fn new(env: Env) -> Self {
        Self { env }
    }

    /// Starts from a copy of the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self::new(current_env())
    }

    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }
}

impl EnvironmentStore for MemoryEnvStore {
    fn snapshot(&self) -> Env {
        self.env.clone()
    }

    fn apply(&mut self, delta: &EnvDelta) {
        self.env.apply(delta);
    }
}
