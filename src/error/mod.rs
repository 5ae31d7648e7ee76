// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            VaultEnvError (~24 bytes)
//!                     |
//!   +----------+------+------+-----+
//!   |          |             |     |
//!   v          v             v     v
//! Unavailable LoadFailed Integration Io
//!  Box<str>   Box<str>      Box   Box
//!
//! Sub-errors (unboxed internally):
//!   Integration NotFound, CommandFailed, Timeout, Interrupted, MalformedOutput
//!   Export      Json, NotAnObject, NestedValue
//!   Process     SpawnFailed, ReadFailed, Timeout
//!   Config      InvalidValue
//!
//! Config and logging setup use anyhow::Result and fail before the run.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VaultEnvError`].
pub type VaultEnvResult<T> = std::result::Result<T, VaultEnvError>;

/// Command used to install Vaultarq.
pub const INSTALL_COMMAND: &str =
    "curl -fsSL https://raw.githubusercontent.com/Vaultarq/vaultarq/main/install.sh | bash";

/// Top-level application error type.
///
/// Every variant ends the run with exit code 1.
#[derive(Debug, Error)]
pub enum VaultEnvError {
    /// The vault executable could not be located or started.
    #[error("{0} is not installed or not in PATH")]
    Unavailable(Box<str>),

    /// The vault tool ran but reported a failure (e.g. vault not initialized).
    #[error("failed to load secrets from {0}")]
    LoadFailed(Box<str>),

    /// The delegated call could not complete.
    #[error("error loading secrets: {0}")]
    Integration(#[from] Box<IntegrationError>),

    /// I/O error (writing the report).
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl VaultEnvError {
    /// Creates an [`VaultEnvError::Unavailable`] for the given executable.
    pub fn unavailable(bin: impl Into<String>) -> Self {
        Self::Unavailable(bin.into().into_boxed_str())
    }

    /// Creates a [`VaultEnvError::LoadFailed`] for the given executable.
    pub fn load_failed(bin: impl Into<String>) -> Self {
        Self::LoadFailed(bin.into().into_boxed_str())
    }

    /// Follow-up lines shown to the user under the error message.
    #[must_use]
    pub fn hint(&self) -> Vec<String> {
        match self {
            Self::Unavailable(_) => vec![
                "Please install Vaultarq and try again:".to_string(),
                INSTALL_COMMAND.to_string(),
            ],
            Self::LoadFailed(bin) => vec![
                "Make sure Vaultarq is properly initialized:".to_string(),
                format!("{bin} init"),
            ],
            Self::Integration(_) | Self::Io(_) => Vec::new(),
        }
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VaultEnvError {
                fn from(err: $error) -> Self {
                    VaultEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    IntegrationError => Integration,
    std::io::Error => Io,
}

// --- Integration Errors ---

/// Failures of the delegated vault call itself, as opposed to the vault
/// reporting a logical failure.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// Executable disappeared between the availability check and the call.
    #[error("executable not found: '{name}'")]
    NotFound { name: String },

    /// The command could not be spawned or its output could not be read.
    #[error("'{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// The command did not finish in time and was killed.
    #[error("'{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    /// The command was interrupted (Ctrl-C).
    #[error("'{command}' was interrupted")]
    Interrupted { command: String },

    /// The command printed something that is not a valid export.
    #[error("malformed output from '{command}': {source}")]
    MalformedOutput {
        command: String,
        #[source]
        source: ExportError,
    },
}

// --- Export Errors ---

/// Reasons a JSON export cannot be turned into variables.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A value is an array or object.
    #[error("value of '{key}' is {kind}, expected a string, number or boolean")]
    NestedValue { key: String, kind: &'static str },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the output of a process failed.
    #[error("failed to read output of process '{command}': {source}")]
    ReadFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },
}

#[cfg(test)]
mod tests;
