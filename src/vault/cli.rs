// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! [`VaultTool`] backed by the `vaultarq` executable.
//!
//! ```text
//! is_available():  resolve bin_path --> <bin> --version (exit status ignored)
//!
//! load_env(store):
//!   [<bin> link <environment>]   non-zero --> Ok(false)
//!   <bin> export --<format>      non-zero --> Ok(false)
//!        |
//!        v
//!   parse_export --> store.apply(delta) --> Ok(true)
//! ```

use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::VaultTool;
use super::export::parse_export;
use crate::config::types::VaultConfig;
use crate::core::env::store::EnvironmentStore;
use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{IntegrationError, ProcessError};

/// Drives the Vaultarq command-line tool.
#[derive(Debug, Clone)]
pub struct VaultarqCli {
    config: VaultConfig,
    token: CancellationToken,
}

impl VaultarqCli {
    #[must_use]
    pub fn new(config: VaultConfig) -> Self {
        Self::with_cancellation(config, CancellationToken::new())
    }

    /// Running vault commands are killed when `token` is cancelled.
    #[must_use]
    pub const fn with_cancellation(config: VaultConfig, token: CancellationToken) -> Self {
        Self { config, token }
    }

    /// Resolves `bin_path` to an executable.
    ///
    /// Paths (absolute, or with a directory part) must name an existing
    /// file. Bare names are looked up on `PATH`.
    #[must_use]
    pub fn resolve(&self) -> Option<PathBuf> {
        let path = Path::new(&self.config.bin_path);
        if path.is_absolute() || path.components().count() > 1 {
            path.is_file().then(|| path.to_path_buf())
        } else {
            ProcessBuilder::find(&self.config.bin_path)
        }
    }

    fn command(&self, program: &Path) -> ProcessBuilder {
        ProcessBuilder::new(program)
            .name(self.config.tool_name())
            .maybe_timeout(self.config.timeout())
    }

    /// Runs a vault command, capturing its output. A non-zero exit is
    /// returned as output, not as an error.
    async fn invoke(&self, builder: ProcessBuilder) -> Result<ProcessOutput, IntegrationError> {
        let command = builder.command_line();
        let output = builder
            .capture_output()
            .run_with_cancellation(self.token.clone())
            .await
            .map_err(|err| match err.downcast::<ProcessError>() {
                Ok(ProcessError::Timeout { timeout_secs, .. }) => IntegrationError::Timeout {
                    command: command.clone(),
                    timeout_secs,
                },
                Ok(other) => IntegrationError::CommandFailed {
                    command: command.clone(),
                    message: other.to_string(),
                },
                Err(err) => IntegrationError::CommandFailed {
                    command: command.clone(),
                    message: format!("{err:#}"),
                },
            })?;

        if output.is_interrupted() {
            return Err(IntegrationError::Interrupted { command });
        }
        Ok(output)
    }
}

fn log_failure(step: &str, output: &ProcessOutput) {
    warn!(
        step,
        exit_code = output.exit_code(),
        stderr = %output.stderr().trim(),
        "vault command failed"
    );
}

impl VaultTool for VaultarqCli {
    fn name(&self) -> &str {
        self.config.tool_name()
    }

    async fn is_available(&self) -> bool {
        let Some(program) = self.resolve() else {
            debug!(bin = %self.config.bin_path, "vault executable not found");
            return false;
        };

        let probe = self
            .command(&program)
            .arg("--version")
            .quiet()
            .run_with_cancellation(self.token.clone())
            .await;

        match probe {
            Ok(output) => {
                debug!(
                    program = %program.display(),
                    exit_code = output.exit_code(),
                    "vault executable started"
                );
                !output.is_interrupted()
            }
            Err(err) => {
                debug!(program = %program.display(), error = %format!("{err:#}"), "vault probe failed");
                false
            }
        }
    }

    async fn load_env(&self, store: &mut dyn EnvironmentStore) -> Result<bool, IntegrationError> {
        let program = self.resolve().ok_or_else(|| IntegrationError::NotFound {
            name: self.config.bin_path.clone(),
        })?;

        if let Some(environment) = &self.config.environment {
            let output = self
                .invoke(self.command(&program).args(["link", environment.as_str()]))
                .await?;
            if !output.success() {
                log_failure("link", &output);
                return Ok(false);
            }
            info!(environment = %environment, "linked vault environment");
        }

        let format = self.config.format;
        let builder = self.command(&program).args(["export", format.as_arg()]);
        let command = builder.command_line();
        let output = self.invoke(builder).await?;
        if !output.success() {
            log_failure("export", &output);
            return Ok(false);
        }

        let delta = parse_export(format, output.stdout())
            .map_err(|source| IntegrationError::MalformedOutput { command, source })?;
        info!(count = delta.len(), %format, "exported secrets");
        store.apply(&delta);
        Ok(true)
    }
}
