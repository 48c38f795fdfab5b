//! Loads from the default `./config` directory.
//!
//! Kept in its own test binary with a single test because it changes the
//! process working directory.

use configo_rs::{ConfigStore, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE};
use pretty_assertions::assert_eq;
use std::env;
use std::fs;
use tempfile::TempDir;

/// Verify `ConfigStore::new` reads `./config` under the working directory.
#[test]
fn new_reads_config_dir_under_working_directory() {
    let temp = TempDir::new().expect("tmp");
    let config_dir = temp.path().join(DEFAULT_CONFIG_DIR);
    fs::create_dir_all(&config_dir).expect("dir");
    fs::write(
        config_dir.join(DEFAULT_CONFIG_FILE),
        "service = api\nport = 8080\n",
    )
    .expect("base");
    fs::write(
        config_dir.join(format!("prod.{DEFAULT_CONFIG_FILE}")),
        "port = 443\n",
    )
    .expect("env");

    let previous = env::current_dir().expect("cwd");
    env::set_current_dir(temp.path()).expect("chdir");
    let prod = ConfigStore::new("prod");
    let missing = ConfigStore::new("staging");
    env::set_current_dir(previous).expect("restore cwd");

    let prod = prod.expect("prod store");
    assert_eq!(prod.get_string("service").expect("service"), "api");
    assert_eq!(prod.get_uint("port").expect("port"), 443);

    let staging = missing.expect("staging store");
    assert_eq!(staging.get_uint("port").expect("port"), 8080);
    assert_eq!(staging.environment(), "staging");
}
