// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::export::{parse_export, parse_json, parse_lines};
use super::{ExportFormat, VaultTool, VaultarqCli};
use crate::config::types::VaultConfig;
use crate::core::env::store::{EnvironmentStore, MemoryEnvStore};
use crate::error::{ExportError, IntegrationError};

fn pairs(delta: &crate::core::env::types::EnvDelta) -> Vec<(&str, &str)> {
    delta.iter().collect()
}

#[test]
fn test_parse_bash_lines() {
    let delta = parse_lines(
        "export API_KEY=\"abc123\"\nexport DB_URL=\"postgres://u:p@h/db?x=1\"\n\nexport   EMPTY=\"\"\n",
    );
    assert_eq!(
        pairs(&delta),
        [
            ("API_KEY", "abc123"),
            ("DB_URL", "postgres://u:p@h/db?x=1"),
            ("EMPTY", ""),
        ]
    );
}

#[test]
fn test_parse_dotenv_lines() {
    let delta = parse_lines("API_KEY=abc123\r\nQUOTED=\"with spaces\"\nEQ=a=b\nLONE=\"\n");
    assert_eq!(
        pairs(&delta),
        [
            ("API_KEY", "abc123"),
            ("QUOTED", "with spaces"),
            ("EQ", "a=b"),
            ("LONE", "\""),
        ]
    );
}

#[test]
fn test_parse_lines_skips_noise() {
    let delta = parse_lines("# comment\nnot a variable\nexport BAD-NAME=\"x\"\n  \nOK=1\n");
    assert_eq!(pairs(&delta), [("OK", "1")]);
}

#[test]
fn test_parse_lines_accepts_both_forms() {
    let output = "export A=\"1\"\nB=2\n";
    let bash = parse_export(ExportFormat::Bash, output).unwrap();
    let dotenv = parse_export(ExportFormat::Dotenv, output).unwrap();
    assert_eq!(bash, dotenv);
    assert_eq!(pairs(&bash), [("A", "1"), ("B", "2")]);
}

#[test]
fn test_parse_json_scalars() {
    let delta = parse_json(
        r#"{"API_KEY": "abc123", "PORT": 8080, "DEBUG": true, "UNSET": null, "bad key": "x"}"#,
    )
    .unwrap();
    let mut entries = pairs(&delta);
    entries.sort_unstable();
    assert_eq!(
        entries,
        [("API_KEY", "abc123"), ("DEBUG", "true"), ("PORT", "8080")]
    );
}

#[test]
fn test_parse_json_empty_output() {
    assert!(parse_json("  \n").unwrap().is_empty());
    assert!(parse_json("{}").unwrap().is_empty());
}

#[test]
fn test_parse_json_rejects_non_objects() {
    let err = parse_json("[1, 2]").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected a JSON object, got an array");

    let err = parse_json(r#"{"NESTED": {"a": 1}}"#).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"value of 'NESTED' is an object, expected a string, number or boolean"
    );

    assert!(matches!(parse_json("{not json"), Err(ExportError::Json(_))));
}

#[tokio::test]
async fn test_missing_executable_is_unavailable() {
    let vault = VaultarqCli::new(VaultConfig {
        bin_path: "/nonexistent/bin/vaultarq".to_string(),
        ..VaultConfig::default()
    });
    assert_eq!(vault.name(), "vaultarq");
    assert!(vault.resolve().is_none());
    assert!(!vault.is_available().await);
}

#[tokio::test]
async fn test_load_with_missing_executable_is_integration_error() {
    let vault = VaultarqCli::new(VaultConfig {
        bin_path: "definitely-not-a-vaultarq-binary".to_string(),
        ..VaultConfig::default()
    });
    let mut store = MemoryEnvStore::default();
    let err = vault.load_env(&mut store).await.unwrap_err();
    assert!(matches!(err, IntegrationError::NotFound { .. }));
    assert!(store.snapshot().is_empty());
}
