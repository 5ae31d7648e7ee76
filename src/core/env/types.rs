// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! EnvDelta: ordered Vec<(key, value)> assignments, later entries win
//! is_valid_key / is_valid_value: what the platform accepts
//! ```

/// An ordered list of variable assignments produced by a loader.
///
/// Applying a delta only inserts or overwrites; it never removes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDelta {
    entries: Vec<(String, String)>,
}

impl EnvDelta {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an assignment.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Returns an iterator over the assignments, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvDelta {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Returns true if `key` can be used as an environment variable name.
///
/// Names must be non-empty and may not contain `=` or NUL.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

/// Returns true if `value` can be stored in the process environment.
#[must_use]
pub fn is_valid_value(value: &str) -> bool {
    !value.contains('\0')
}
