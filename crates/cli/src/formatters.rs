//! Output formatting for resolved options.
//!
//! Responsibilities:
//! - Read options through the typed accessors and turn them into display rows.
//! - Format rows as an aligned table or pretty-printed JSON.
//!
//! Does NOT handle:
//! - Option resolution (see `ldap_config::initialize`).
//!
//! Invariants:
//! - Secret option values are never printed; a non-empty secret renders as `****`.
//! - Options that are not set render as `(not set)` with origin `-`.

use anyhow::Result;
use ldap_config::OptionsMap;
use ldap_config::constants::is_secret_option;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::args::OutputFormat;

const REDACTED: &str = "****";
const NOT_SET: &str = "(not set)";

/// One displayed option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRow {
    pub key: String,
    pub value: String,
    pub origin: String,
}

impl OptionRow {
    fn read(options: &OptionsMap, key: &str, as_seconds: bool) -> Self {
        let key = key.to_uppercase();
        let Some(origin) = options.get(&key).map(|o| o.origin.to_string()) else {
            return Self {
                key,
                value: NOT_SET.to_string(),
                origin: "-".to_string(),
            };
        };

        let value = if is_secret_option(&key) {
            let secret = options.get_secret(&key);
            if secret.expose_secret().is_empty() {
                String::new()
            } else {
                REDACTED.to_string()
            }
        } else if as_seconds {
            options.get_seconds(&key).as_secs().to_string()
        } else {
            options.get_string(&key)
        };

        Self { key, value, origin }
    }
}

/// Build display rows for the selected keys, or for every option when none are given.
pub fn collect_rows(options: &OptionsMap, keys: &[String], as_seconds: bool) -> Vec<OptionRow> {
    if keys.is_empty() {
        options
            .iter()
            .map(|option| OptionRow::read(options, &option.key, false))
            .collect()
    } else {
        keys.iter()
            .map(|key| OptionRow::read(options, key, as_seconds))
            .collect()
    }
}

/// Format rows in the requested output format.
pub fn format_rows(rows: &[OptionRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

fn format_table(rows: &[OptionRow]) -> String {
    if rows.is_empty() {
        return "No LDAP options resolved.\n".to_string();
    }

    let width = |text: &str| text.chars().count();
    let key_width = rows.iter().map(|r| width(&r.key)).max().unwrap_or(0).max(3);
    let value_width = rows.iter().map(|r| width(&r.value)).max().unwrap_or(0).max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<key_width$}  {:<value_width$}  {}\n",
        "KEY", "VALUE", "ORIGIN"
    ));
    for row in rows {
        output.push_str(&format!(
            "{:<key_width$}  {:<value_width$}  {}\n",
            row.key, row.value, row.origin
        ));
    }
    output
}
