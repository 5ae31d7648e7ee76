// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::container::Env;
use super::current_env;
use super::store::{EnvironmentStore, MemoryEnvStore};
use super::types::{EnvDelta, is_valid_key, is_valid_value};

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("foo"), None);
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    env2.set("KEY2", "value2");

    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
    assert_eq!(env2.get("KEY2"), Some("value2"));
}

#[test]
fn test_env_iter_is_sorted() {
    let env: Env = [("b", "2"), ("A", "1"), ("_x", "3"), ("a", "4")]
        .into_iter()
        .collect();
    let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["A", "_x", "a", "b"]);
}

#[test]
fn test_env_apply_later_entries_win() {
    let mut env = Env::new();
    env.set("KEEP", "same");

    let mut delta = EnvDelta::new();
    delta.push("API_KEY", "first").push("API_KEY", "second");
    env.apply(&delta);

    assert_eq!(env.get("API_KEY"), Some("second"));
    assert_eq!(env.get("KEEP"), Some("same"));
}

#[test]
fn test_env_changed_since() {
    let before: Env = [("PATH", "/usr/bin"), ("TOKEN", "old")].into_iter().collect();
    let mut after = before.clone();
    after.set("TOKEN", "new").set("API_KEY", "abc123");

    let changed = after.changed_since(&before);
    insta::assert_snapshot!(
        format!("{:?}", changed.to_map()),
        @r#"{"API_KEY": "abc123", "TOKEN": "new"}"#
    );
}

#[test]
fn test_env_changed_since_shared_data_is_empty() {
    let env: Env = [("A", "1")].into_iter().collect();
    let same = env.clone();
    assert!(same.changed_since(&env).is_empty());
}

#[test]
fn test_memory_store_snapshot_is_isolated() {
    let mut store = MemoryEnvStore::new([("HOME", "/root")].into_iter().collect());
    let before = store.snapshot();

    store.apply(&[("DB_PASSWORD", "hunter2")].into_iter().collect());

    assert_eq!(before.get("DB_PASSWORD"), None);
    assert_eq!(store.snapshot().get("DB_PASSWORD"), Some("hunter2"));
    assert_eq!(store.env().len(), 2);
}

#[test]
fn test_key_and_value_validation() {
    assert!(is_valid_key("API_KEY"));
    assert!(!is_valid_key(""));
    assert!(!is_valid_key("A=B"));
    assert!(!is_valid_key("A\0B"));
    assert!(is_valid_value(""));
    assert!(!is_valid_value("a\0b"));
}

#[test]
fn test_current_env() {
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}
