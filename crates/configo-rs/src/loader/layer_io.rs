//! IO helpers for reading config layers from disk.

use super::parse::{self, LineError};
use super::{ConfigLayer, ConfigLayerSource, LoadedLayer};
use crate::ConfigError;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a layer that must exist.
pub(super) fn load_required_layer(
    source: ConfigLayerSource,
    path: &Path,
) -> Result<LoadedLayer, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::MissingMandatoryFile {
        path: path.to_path_buf(),
        source,
    })?;
    read_layer(source, path, file)
}

/// Load a layer if its file exists; a missing file yields `None`.
pub(super) fn load_optional_layer(
    source: ConfigLayerSource,
    path: &Path,
) -> Result<Option<LoadedLayer>, ConfigError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(
                "optional layer missing (source={:?}, path={})",
                source,
                path.display()
            );
            return Ok(None);
        }
        Err(err) => {
            return Err(ConfigError::ReadFailed {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };
    Ok(Some(read_layer(source, path, file)?))
}

/// Parse every line of an open file; the file is closed when this returns.
fn read_layer(
    source: ConfigLayerSource,
    path: &Path,
    file: File,
) -> Result<LoadedLayer, ConfigError> {
    debug!(
        "reading config layer (source={:?}, path={})",
        source,
        path.display()
    );
    let mut entries = Vec::new();
    for (idx, chunk) in BufReader::new(file).split(b'\n').enumerate() {
        let mut bytes = chunk.map_err(|err| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: err,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        // Invalid UTF-8 becomes U+FFFD rather than failing the load.
        let line = String::from_utf8_lossy(&bytes).into_owned();
        let line_no = idx + 1;
        let parsed =
            parse::parse_line(&line).map(|(key, value)| (key.to_string(), value.to_string()));
        match parsed {
            Ok(entry) => entries.push(entry),
            Err(LineError::MissingSeparator) => {
                return Err(ConfigError::InvalidEntry {
                    path: path.to_path_buf(),
                    line: line_no,
                    content: line,
                });
            }
            Err(LineError::InvalidKey) => {
                return Err(ConfigError::InvalidKey {
                    path: path.to_path_buf(),
                    line: line_no,
                    content: line,
                });
            }
        }
    }

    Ok(LoadedLayer {
        meta: ConfigLayer {
            source,
            path: path.to_path_buf(),
            entries: entries.len(),
        },
        entries,
    })
}
