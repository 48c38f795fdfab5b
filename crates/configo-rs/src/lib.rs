//! Two-layer key-value configuration.
//!
//! A [`ConfigStore`] merges a mandatory base file (`config/app.config`) with an
//! optional environment file (`config/<environment>.app.config`) and serves
//! typed lookups over the result. Each line of a config file is
//! `key = value`; surrounding whitespace and one layer of double quotes are
//! stripped from both sides.

mod error;
mod loader;
mod store;
mod value;

/// Public error type returned by loading and lookup APIs.
pub use error::ConfigError;
/// Loader options and layer metadata.
pub use loader::{
    ConfigLayer, ConfigLayerSource, ConfigStoreOptions, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE,
};
pub use store::ConfigStore;
pub use value::ConfigValue;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Host binaries are expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
