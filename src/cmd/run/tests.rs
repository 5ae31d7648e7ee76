// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::Cell;

use super::{Outcome, exit_status, run};
use crate::core::env::container::Env;
use crate::core::env::store::{EnvironmentStore, MemoryEnvStore};
use crate::core::env::types::EnvDelta;
use crate::error::{IntegrationError, VaultEnvError};
use crate::report::{Exclusions, ReportOptions};
use crate::vault::VaultTool;

enum Load {
    Secrets(Vec<(&'static str, &'static str)>),
    Refused,
    Broken,
}

struct FakeVault {
    available: bool,
    load: Load,
    probes: Cell<usize>,
    loads: Cell<usize>,
}

impl FakeVault {
    fn new(available: bool, load: Load) -> Self {
        Self {
            available,
            load,
            probes: Cell::new(0),
            loads: Cell::new(0),
        }
    }
}

impl VaultTool for FakeVault {
    fn name(&self) -> &str {
        "vaultarq"
    }

    async fn is_available(&self) -> bool {
        self.probes.set(self.probes.get() + 1);
        self.available
    }

    async fn load_env(&self, store: &mut dyn EnvironmentStore) -> Result<bool, IntegrationError> {
        self.loads.set(self.loads.get() + 1);
        match &self.load {
            Load::Secrets(pairs) => {
                store.apply(&pairs.iter().copied().collect::<EnvDelta>());
                Ok(true)
            }
            Load::Refused => Ok(false),
            Load::Broken => Err(IntegrationError::Interrupted {
                command: "vaultarq export --bash".to_string(),
            }),
        }
    }
}

fn base_store() -> MemoryEnvStore {
    MemoryEnvStore::new(
        [("PATH", "/usr/bin"), ("HOME", "/home/dev"), ("EDITOR", "vim")]
            .into_iter()
            .collect::<Env>(),
    )
}

async fn check(
    vault: &FakeVault,
    store: &mut MemoryEnvStore,
    options: &ReportOptions,
) -> (Result<Outcome, VaultEnvError>, String) {
    let mut out = Vec::new();
    let result = run(vault, store, options, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_unavailable_never_loads() {
    let vault = FakeVault::new(false, Load::Secrets(vec![("API_KEY", "abc123")]));
    let mut store = base_store();
    let (result, out) = check(&vault, &mut store, &ReportOptions::default()).await;

    let err = result.unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"vaultarq is not installed or not in PATH");
    assert_eq!(vault.probes.get(), 1);
    assert_eq!(vault.loads.get(), 0);
    assert_eq!(out, "Checking if Vaultarq is installed...\n");
    assert!(store.env().get("API_KEY").is_none());
}

#[tokio::test]
async fn test_load_refused_prints_no_environment() {
    let vault = FakeVault::new(true, Load::Refused);
    let mut store = base_store();
    let (result, out) = check(&vault, &mut store, &ReportOptions::default()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, VaultEnvError::LoadFailed(_)));
    assert_eq!(err.hint(), ["Make sure Vaultarq is properly initialized:", "vaultarq init"]);
    assert_eq!(vault.loads.get(), 1);
    assert!(!out.contains("EDITOR="));
    assert!(!out.contains("Loaded environment variables"));
}

#[tokio::test]
async fn test_integration_error_propagates() {
    let vault = FakeVault::new(true, Load::Broken);
    let mut store = base_store();
    let (result, out) = check(&vault, &mut store, &ReportOptions::default()).await;

    let err = result.unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"error loading secrets: 'vaultarq export --bash' was interrupted"
    );
    assert!(err.hint().is_empty());
    assert!(!out.contains("EDITOR="));
}

#[tokio::test]
async fn test_success_reports_filtered_sorted() {
    let vault = FakeVault::new(
        true,
        Load::Secrets(vec![("STRIPE_KEY", "sk_1"), ("API_KEY", "abc123")]),
    );
    let mut store = base_store();
    let (result, out) = check(&vault, &mut store, &ReportOptions::default()).await;

    assert_eq!(result.unwrap(), Outcome::Reported(3));
    assert_eq!(
        out,
        "Checking if Vaultarq is installed...\n\
         ✅ Vaultarq is installed\n\
         Loading secrets into environment variables...\n\
         ✅ Secrets loaded successfully\n\
         \nLoaded environment variables:\n\
         API_KEY=abc123\n\
         EDITOR=vim\n\
         STRIPE_KEY=sk_1\n\
         \nExample use:\n\
         -----------------------------\n\
         In your application, you can now access these variables using:\n\
         std::env::var(\"API_KEY\").unwrap_or_default()\n"
    );
    assert_eq!(store.env().get("API_KEY"), Some("abc123"));
}

#[tokio::test]
async fn test_empty_vault_is_success() {
    let vault = FakeVault::new(true, Load::Secrets(vec![]));
    let mut store = MemoryEnvStore::new([("PATH", "/bin")].into_iter().collect());
    let (result, out) = check(&vault, &mut store, &ReportOptions::default()).await;

    assert_eq!(result.unwrap(), Outcome::NoSecrets);
    assert!(out.ends_with(
        "No secrets found in Vaultarq vault.\nTry adding some with: vaultarq push API_KEY=my-secret-key\n"
    ));
}

#[tokio::test]
async fn test_only_loaded_reports_new_and_changed() {
    let vault = FakeVault::new(
        true,
        Load::Secrets(vec![("API_KEY", "abc123"), ("EDITOR", "nano"), ("HOME", "/home/dev")]),
    );
    let mut store = base_store();
    let options = ReportOptions::builder()
        .exclusions(Exclusions::none())
        .only_loaded(true)
        .quiet(true)
        .build();
    let (result, out) = check(&vault, &mut store, &options).await;

    assert_eq!(result.unwrap(), Outcome::Reported(2));
    assert_eq!(out, "API_KEY=abc123\nEDITOR=nano\n");
}

#[tokio::test]
async fn test_only_loaded_with_nothing_new() {
    let vault = FakeVault::new(true, Load::Secrets(vec![("EDITOR", "vim")]));
    let mut store = base_store();
    let options = ReportOptions::builder().only_loaded(true).quiet(true).build();
    let (result, out) = check(&vault, &mut store, &options).await;

    assert_eq!(result.unwrap(), Outcome::NoSecrets);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_exit_status_per_outcome() {
    let cases = [
        (FakeVault::new(true, Load::Secrets(vec![("API_KEY", "abc123")])), 0),
        (FakeVault::new(true, Load::Secrets(Vec::new())), 0),
        (FakeVault::new(false, Load::Refused), 1),
        (FakeVault::new(true, Load::Refused), 1),
        (FakeVault::new(true, Load::Broken), 1),
    ];
    for (vault, expected) in cases {
        let (result, _) = check(&vault, &mut base_store(), &ReportOptions::default()).await;
        assert_eq!(exit_status(&result), expected, "{result:?}");
    }
}
