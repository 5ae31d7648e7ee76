// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (files, env, flags) --> Logging
//!   --> cmd::run(VaultarqCli, store, report options, stdout)
//!   --> exit 0 | 1
//! ```

use std::io::Write;
use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use vaultarq_env::cli::{self, Cli};
use vaultarq_env::cmd::run::{Outcome, exit_status, run};
use vaultarq_env::config::loader::ConfigLoader;
use vaultarq_env::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use vaultarq_env::core::env::store::{EnvironmentStore, MemoryEnvStore, ProcessEnvStore};
use vaultarq_env::error::{VaultEnvError, VaultEnvResult};
use vaultarq_env::logging::{LogConfig, init_logging};
use vaultarq_env::report::ReportOptions;
use vaultarq_env::vault::VaultarqCli;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

// Single-threaded so that setting process variables cannot race another thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let token = CancellationToken::new();
    spawn_interrupt_handler(token.clone());

    let result = check(&cli, &config, token).await;
    match &result {
        Ok(outcome) => debug!(?outcome, "check finished"),
        Err(e) => report_error(e),
    }
    ExitCode::from(exit_status(&result))
}

fn build_config_loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(cli: &Cli) -> vaultarq_env::error::Result<Config> {
    let mut config = build_config_loader(cli).build()?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn spawn_interrupt_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });
}

async fn check(cli: &Cli, config: &Config, token: CancellationToken) -> VaultEnvResult<Outcome> {
    let vault = VaultarqCli::with_cancellation(config.vault.clone(), token);
    let options = ReportOptions::from_config(&config.report, config.vault.tool_name());

    let mut store: Box<dyn EnvironmentStore> = if cli.global.isolated {
        Box::new(MemoryEnvStore::from_process())
    } else {
        // SAFETY: the runtime is single-threaded and nothing else touches the
        // environment while the check runs.
        Box::new(unsafe { ProcessEnvStore::new() })
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&vault, store.as_mut(), &options, &mut out).await?;
    out.flush()?;
    Ok(outcome)
}

fn report_error(err: &VaultEnvError) {
    eprintln!("❌ {err}");
    for line in err.hint() {
        eprintln!("{line}");
    }
}
