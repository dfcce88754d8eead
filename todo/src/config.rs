//! Configuration for the demo binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use statecraft_runtime::StoreConfig;
use std::env;

/// Demo configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log filter directive (`TODO_LOG`, default `info`)
    pub log_filter: String,
    /// Listener limit for the store (`TODO_MAX_LISTENERS`, default 64)
    pub max_listeners: usize,
    /// Print each state as JSON (`TODO_PRINT_JSON`, default true)
    pub print_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            max_listeners: 64,
            print_json: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable variables keep their default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            log_filter: lookup("TODO_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            max_listeners: lookup("TODO_MAX_LISTENERS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_listeners),
            print_json: lookup("TODO_PRINT_JSON")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.print_json),
        }
    }

    /// Store configuration derived from these settings
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default()
            .with_name("todo")
            .with_max_listeners(self.max_listeners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("TODO_LOG", "todo=debug"),
            ("TODO_MAX_LISTENERS", "3"),
            ("TODO_PRINT_JSON", "false"),
        ]));

        assert_eq!(config.log_filter, "todo=debug");
        assert_eq!(config.max_listeners, 3);
        assert!(!config.print_json);
    }

    #[test]
    fn unparseable_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("TODO_LOG", "  "),
            ("TODO_MAX_LISTENERS", "many"),
            ("TODO_PRINT_JSON", "yes please"),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn store_config_carries_limit() {
        let config = Config {
            max_listeners: 7,
            ..Config::default()
        };

        let store = config.store_config();
        assert_eq!(store.name, "todo");
        assert_eq!(store.max_listeners, 7);
    }
}
