//! Two-layer config loader.
//!
//! Reads the mandatory base file and the optional environment file from the
//! config directory, then merges them so the environment file wins on key
//! collisions.

mod layer_io;
mod merge;
mod parse;


use crate::ConfigError;
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default config directory, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = "./config";
/// Default base config filename.
pub const DEFAULT_CONFIG_FILE: &str = "app.config";

/// Origin of a config layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// Base file, shared by every environment.
    Base,
    /// Environment-specific overrides.
    Environment,
}

/// Metadata about a layer that was read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    /// Layer origin.
    pub source: ConfigLayerSource,
    /// File the layer was read from.
    pub path: PathBuf,
    /// Number of entry lines parsed from the file.
    pub entries: usize,
}

/// Options controlling where the config files live.
#[derive(Debug, Clone)]
pub struct ConfigStoreOptions {
    /// Environment name, used to build the override file name.
    pub environment: String,
    /// Directory holding both config files.
    pub config_dir: PathBuf,
    /// Base file name; the environment file is `<environment>.<file_name>`.
    pub file_name: String,
}

impl ConfigStoreOptions {
    /// Options for `environment` using the default directory and file name.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            file_name: DEFAULT_CONFIG_FILE.to_string(),
        }
    }

    /// Read config files from `dir` instead of `./config`.
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Use a different base file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Path of the mandatory base file.
    pub fn base_path(&self) -> PathBuf {
        self.config_dir.join(&self.file_name)
    }

    /// Path of the optional environment file.
    pub fn environment_path(&self) -> PathBuf {
        self.config_dir
            .join(format!("{}.{}", self.environment, self.file_name))
    }
}

/// Parsed entries of one layer, in file order.
#[derive(Debug, Clone)]
pub(crate) struct LoadedLayer {
    pub(crate) meta: ConfigLayer,
    pub(crate) entries: Vec<(String, String)>,
}

/// Merged result of loading every layer.
#[derive(Debug)]
pub(crate) struct MergedEntries {
    pub(crate) entries: BTreeMap<String, String>,
    pub(crate) layers: Vec<ConfigLayer>,
}

/// Load the base and environment layers and merge them.
pub(crate) fn load_layers(options: &ConfigStoreOptions) -> Result<MergedEntries, ConfigError> {
    let mut entries = BTreeMap::new();
    let mut layers = Vec::new();

    let base = layer_io::load_required_layer(ConfigLayerSource::Base, &options.base_path())?;
    debug!(
        "loaded base layer (path={}, entries={})",
        base.meta.path.display(),
        base.meta.entries
    );
    layers.push(base.meta.clone());
    merge::merge_layer(&mut entries, base);

    let environment_path = options.environment_path();
    if let Some(layer) =
        layer_io::load_optional_layer(ConfigLayerSource::Environment, &environment_path)?
    {
        debug!(
            "loaded environment layer (path={}, entries={})",
            layer.meta.path.display(),
            layer.meta.entries
        );
        layers.push(layer.meta.clone());
        merge::merge_layer(&mut entries, layer);
    }

    Ok(MergedEntries { entries, layers })
}
