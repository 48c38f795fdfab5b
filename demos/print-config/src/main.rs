use anyhow::{Context, Result};
use clap::Parser;
use configo_rs::{ConfigStore, ConfigStoreOptions, DEFAULT_CONFIG_DIR, init_logging};
use log::info;
use std::path::PathBuf;

/// Print the merged configuration for an environment.
#[derive(Debug, Parser)]
#[command(name = "print-config")]
struct Args {
    /// Environment name; selects `<env>.app.config` as the override file.
    #[arg(default_value = "dev")]
    environment: String,
    /// Directory holding `app.config` and the environment files.
    #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let options = ConfigStoreOptions::new(&args.environment).with_config_dir(&args.config_dir);
    let store = ConfigStore::load_with_options(options).with_context(|| {
        format!(
            "failed to load config for '{}' from {}",
            args.environment,
            args.config_dir.display()
        )
    })?;

    for layer in store.layers() {
        info!(
            "layer {:?}: {} ({} entries)",
            layer.source,
            layer.path.display(),
            layer.entries
        );
    }

    println!("# environment: {}", store.environment());
    for key in store.get_keys() {
        let value = store.get_string(key)?;
        println!("{key} = \"{value}\"");
    }
    Ok(())
}
