// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! ```text
//! Env (copy-on-write)
//! data: Arc<BTreeMap<String, String>>
//! clone shares the Arc until the first set()/apply()
//! ```

use super::types::EnvDelta;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// Keys are kept in byte-lexicographic order, which is also the order the
/// report prints them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    data: Arc<BTreeMap<String, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            data: Arc::new(vars),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.data).insert(key.into(), value.into());
        self
    }

    /// Applies every assignment of `delta` in order.
    pub fn apply(&mut self, delta: &EnvDelta) -> &mut Self {
        if delta.is_empty() {
            return self;
        }
        let vars = Arc::make_mut(&mut self.data);
        for (key, value) in delta.iter() {
            vars.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Returns the entries of `self` that are absent from `before` or
    /// carry a different value there.
    #[must_use]
    pub fn changed_since(&self, before: &Self) -> Self {
        if Arc::ptr_eq(&self.data, &before.data) {
            return Self::new();
        }
        let changed = self
            .data
            .iter()
            .filter(|(k, v)| before.get(k) != Some(v.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self::from_map(changed)
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        (*self.data).clone()
    }

    /// Returns an iterator over environment variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
