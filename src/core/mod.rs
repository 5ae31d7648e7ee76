// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!              core
//!               |
//!          +----+----+
//!          |         |
//!          v         v
//!         env     process
//!          |         |
//!   Env, EnvDelta  Builder
//!   EnvironmentStore  Output
//! ```

pub mod env;
pub mod process;
