// vaultarq-env: Vaultarq environment loader check
//
// SPDX-FileCopyrightText: 2026 Vaultarq Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsing of `vaultarq export` output.
//!
//! ```text
//! --bash / --dotenv            --json
//!   export KEY="VALUE"           {"KEY": "VALUE", "N": 1, "B": true}
//!   KEY=VALUE                          |
//!   KEY="VALUE"                        v
//!        |                       scalars only, null skipped
//!        v                             |
//!   line by line, unknown lines        |
//!   skipped                            |
//!        +-------------+---------------+
//!                      v
//!                  EnvDelta
//! ```

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::config::types::ExportFormat;
use crate::core::env::types::EnvDelta;
use crate::error::ExportError;

static BASH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^export\s+([A-Za-z0-9_]+)="(.*)"$"#).expect("valid regex")
});

static DOTENV_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)=(.*)$").expect("valid regex"));

static VALID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid regex"));

/// Parses export output in `format` into assignments, in output order.
///
/// # Errors
///
/// Only the JSON format can fail: the output must be an object whose values
/// are strings, numbers, booleans or null.
pub fn parse_export(format: ExportFormat, output: &str) -> Result<EnvDelta, ExportError> {
    match format {
        ExportFormat::Bash | ExportFormat::Dotenv => Ok(parse_lines(output)),
        ExportFormat::Json => parse_json(output),
    }
}

/// Parses `export KEY="VALUE"` and `KEY=VALUE` lines. Both forms are accepted
/// whichever format was requested.
#[must_use]
pub fn parse_lines(output: &str) -> EnvDelta {
    let mut delta = EnvDelta::new();
    for (index, line) in output.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        if let Some((key, value)) = parse_line(line) {
            delta.push(key, value);
        } else {
            debug!(line = index + 1, "skipping unrecognized export line");
        }
    }
    delta
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    if let Some(caps) = BASH_LINE.captures(line) {
        let (_, [key, value]) = caps.extract();
        return Some((key, value));
    }
    let caps = DOTENV_LINE.captures(line)?;
    let (_, [key, value]) = caps.extract();
    Some((key, strip_quotes(value)))
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Parses a JSON object of scalars.
///
/// # Errors
///
/// See [`parse_export`].
pub fn parse_json(output: &str) -> Result<EnvDelta, ExportError> {
    if output.trim().is_empty() {
        return Ok(EnvDelta::new());
    }

    let map = match serde_json::from_str(output)? {
        Value::Object(map) => map,
        other => return Err(ExportError::NotAnObject(kind_of(&other))),
    };

    let mut delta = EnvDelta::new();
    for (key, value) in map {
        if !VALID_NAME.is_match(&key) {
            warn!(key = %key.escape_debug(), "skipping exported key with an invalid name");
            continue;
        }
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ExportError::NestedValue {
                    kind: kind_of(&value),
                    key,
                });
            }
        };
        delta.push(key, value);
    }
    Ok(delta)
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
