//! Merge helpers for layered entries.

use super::LoadedLayer;
use std::collections::BTreeMap;

/// Insert a layer's entries into the merged map; later entries overwrite earlier ones.
pub(super) fn merge_layer(merged: &mut BTreeMap<String, String>, layer: LoadedLayer) {
    for (key, value) in layer.entries {
        merged.insert(key, value);
    }
}
