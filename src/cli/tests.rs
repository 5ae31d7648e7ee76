// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::config::Config;
use crate::config::types::ExportFormat;
use crate::logging::LogLevel;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_no_arguments() {
    let cli = Cli::try_parse_from(["vaultarq-env"]).unwrap();
    assert!(cli.global.configs.is_empty());
    assert!(cli.global.log_level.is_none());
    assert!(!cli.global.isolated);
    assert!(cli.vault.environment.is_none());
    assert!(cli.vault.format.is_none());
    assert!(cli.report.exclude.is_empty());
    assert!(!cli.report.quiet);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "vaultarq-env",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-l",
        "4",
        "--file-log-level",
        "3",
        "--log-file",
        "run.log",
        "--isolated",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.file_log_level, Some(3));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("run.log")));
    assert!(cli.global.isolated);
}

#[test]
fn test_parse_vault_options() {
    let cli = Cli::try_parse_from([
        "vaultarq-env",
        "-b",
        "/opt/vaultarq",
        "-e",
        "staging",
        "-f",
        "json",
        "--timeout",
        "15",
    ])
    .unwrap();
    assert_eq!(cli.vault.bin_path.as_deref(), Some("/opt/vaultarq"));
    assert_eq!(cli.vault.environment.as_deref(), Some("staging"));
    assert_eq!(cli.vault.format, Some(ExportFormat::Json));
    assert_eq!(cli.vault.timeout, Some(15));
}

#[test]
fn test_parse_report_options() {
    let cli = Cli::try_parse_from([
        "vaultarq-env",
        "-x",
        "LOGNAME",
        "--exclude",
        "HOSTNAME",
        "--exclude-prefix",
        "XDG_",
        "--no-default-excludes",
        "--only-loaded",
        "--mask",
        "-q",
    ])
    .unwrap();
    assert_eq!(cli.report.exclude, ["LOGNAME", "HOSTNAME"]);
    assert_eq!(cli.report.exclude_prefix, ["XDG_"]);
    assert!(cli.report.no_default_excludes);
    assert!(cli.report.only_loaded);
    assert!(cli.report.mask);
    assert!(cli.report.quiet);
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(Cli::try_parse_from(["vaultarq-env", "-l", "6"]).is_err());
    assert!(Cli::try_parse_from(["vaultarq-env", "--format", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["vaultarq-env", "--timeout", "0"]).is_err());
    assert!(Cli::try_parse_from(["vaultarq-env", "build"]).is_err());
}

#[test]
fn test_overrides_replace_config_values() {
    let mut config = Config::default();
    let cli = Cli::try_parse_from([
        "vaultarq-env",
        "-l",
        "5",
        "-b",
        "./bin/vq",
        "-f",
        "dotenv",
        "-e",
        "prod",
        "--timeout",
        "30",
        "--mask",
    ])
    .unwrap();
    cli.apply_overrides(&mut config);

    assert_eq!(config.global.log_level, LogLevel::TRACE);
    assert_eq!(config.vault.bin_path, "./bin/vq");
    assert_eq!(config.vault.format, ExportFormat::Dotenv);
    assert_eq!(config.vault.environment.as_deref(), Some("prod"));
    assert_eq!(config.vault.timeout_secs, Some(30));
    assert!(config.report.mask_values);
    assert!(!config.report.quiet);
}

#[test]
fn test_overrides_extend_or_clear_exclusions() {
    let mut config = Config::default();
    let cli = Cli::try_parse_from(["vaultarq-env", "-x", "LOGNAME"]).unwrap();
    cli.apply_overrides(&mut config);
    assert!(config.report.exclude_keys.contains(&"PATH".to_string()));
    assert!(config.report.exclude_keys.contains(&"LOGNAME".to_string()));

    let mut config = Config::default();
    let cli = Cli::try_parse_from([
        "vaultarq-env",
        "--no-default-excludes",
        "--exclude-prefix",
        "XDG_",
    ])
    .unwrap();
    cli.apply_overrides(&mut config);
    assert!(config.report.exclude_keys.is_empty());
    assert_eq!(config.report.exclude_prefixes, ["XDG_"]);
}

#[test]
fn test_no_flags_leave_config_untouched() {
    let mut config = Config::parse("[report]\nquiet = true\n").unwrap();
    Cli::try_parse_from(["vaultarq-env"])
        .unwrap()
        .apply_overrides(&mut config);
    assert!(config.report.quiet);
    assert_eq!(config.vault.format, ExportFormat::Bash);
}
