// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, IntegrationError, VaultEnvError, VaultEnvResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "vault".to_string(),
        key: "format".to_string(),
        message: "expected 'bash', 'dotenv', or 'json', got 'xml'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'format' in section '[vault]': expected 'bash', 'dotenv', or 'json', got 'xml'"
    );
}

#[test]
fn test_unavailable_display_and_hint() {
    let err = VaultEnvError::unavailable("vaultarq");
    insta::assert_snapshot!(err.to_string(), @"vaultarq is not installed or not in PATH");
    let hint = err.hint();
    assert_eq!(hint.len(), 2);
    assert!(hint[1].contains("install.sh"));
}

#[test]
fn test_load_failed_hint_names_binary() {
    let err = VaultEnvError::load_failed("/opt/vaultarq/bin/vaultarq");
    assert_eq!(
        err.hint(),
        vec![
            "Make sure Vaultarq is properly initialized:".to_string(),
            "/opt/vaultarq/bin/vaultarq init".to_string(),
        ]
    );
}

#[test]
fn test_integration_error_boxes_into_top_level() {
    let err: VaultEnvError = IntegrationError::Timeout {
        command: "vaultarq export --bash".to_string(),
        timeout_secs: 5,
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"error loading secrets: 'vaultarq export --bash' timed out after 5 seconds"
    );
    assert!(err.hint().is_empty());
}

#[test]
fn test_error_size() {
    let size = std::mem::size_of::<VaultEnvError>();
    assert!(size <= 24, "VaultEnvError is {size} bytes, expected <= 24");
}

#[test]
fn test_result_size() {
    let size = std::mem::size_of::<VaultEnvResult<()>>();
    assert!(size <= 24, "VaultEnvResult<()> is {size} bytes, expected <= 24");
}
