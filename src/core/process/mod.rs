// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("vaultarq")
//!   .args() .capture_output() .maybe_timeout()
//!   .run_with_cancellation(token)
//!       --> tokio::process::Command
//!           stream stdout/stderr
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod io;
mod runner;
