//! The merged, read-only configuration store.

use crate::loader::{self, ConfigLayer, ConfigStoreOptions};
use crate::{ConfigError, ConfigValue};
use log::info;
use std::collections::BTreeMap;

/// Merged key-value configuration for one environment.
///
/// Built once from the base file and the environment file, then never
/// modified. Every accessor takes `&self`, so a store can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    environment: String,
    entries: BTreeMap<String, String>,
    keys: Vec<String>,
    layers: Vec<ConfigLayer>,
}

impl ConfigStore {
    /// Load `./config/app.config` and `./config/<environment>.app.config`.
    pub fn new(environment: impl Into<String>) -> Result<Self, ConfigError> {
        Self::load_with_options(ConfigStoreOptions::new(environment))
    }

    /// Load the two layers from the locations given in `options`.
    ///
    /// The base file is mandatory; a missing environment file is skipped.
    /// Any malformed line in either file fails the whole load.
    pub fn load_with_options(options: ConfigStoreOptions) -> Result<Self, ConfigError> {
        let merged = loader::load_layers(&options)?;
        let keys: Vec<String> = merged.entries.keys().cloned().collect();
        info!(
            "config loaded (environment={}, layers={}, keys={})",
            options.environment,
            merged.layers.len(),
            keys.len()
        );
        Ok(Self {
            environment: options.environment,
            entries: merged.entries,
            keys,
            layers: merged.layers,
        })
    }

    /// Environment name supplied at construction.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Keys captured after loading, in ascending order.
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Layers that were read from disk, base first.
    pub fn layers(&self) -> &[ConfigLayer] {
        &self.layers
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Read `key` as `T`, failing on a missing key or an unparseable value.
    pub fn get<T: ConfigValue>(&self, key: &str) -> Result<T, ConfigError> {
        let raw = self.raw(key)?;
        T::parse_value(raw).ok_or_else(|| ConfigError::TypeMismatch {
            key: key.to_string(),
            value: raw.to_string(),
            expected: T::TYPE_NAME,
        })
    }

    /// Read `key` as `T`, falling back to `default` on any lookup error.
    pub fn get_or<T: ConfigValue>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn get_string(&self, key: &str) -> Result<&str, ConfigError> {
        self.raw(key)
    }

    pub fn get_string_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.raw(key).unwrap_or(default)
    }

    /// Base-10 signed 64-bit integer.
    pub fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.get(key)
    }

    pub fn get_int_or_default(&self, key: &str, default: i64) -> i64 {
        self.get_or(key, default)
    }

    /// Base-10 unsigned 64-bit integer.
    pub fn get_uint(&self, key: &str) -> Result<u64, ConfigError> {
        self.get(key)
    }

    pub fn get_uint_or_default(&self, key: &str, default: u64) -> u64 {
        self.get_or(key, default)
    }

    pub fn get_float(&self, key: &str) -> Result<f64, ConfigError> {
        self.get(key)
    }

    pub fn get_float_or_default(&self, key: &str, default: f64) -> f64 {
        self.get_or(key, default)
    }

    /// Accepts `true`/`false`/`t`/`f` in any case, plus `1`/`0`.
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.get(key)
    }

    pub fn get_bool_or_default(&self, key: &str, default: bool) -> bool {
        self.get_or(key, default)
    }

    fn raw(&self, key: &str) -> Result<&str, ConfigError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingKey {
                key: key.to_string(),
            })
    }
}
