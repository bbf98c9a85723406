//! Bundle discovery

use crate::errors::RegistryError;
use crate::BUNDLE_EXTENSION;
use std::path::Path;
use tracing::debug;

/// List the framework bundle names in `dir`.
///
/// Only direct entries whose name ends in [`BUNDLE_EXTENSION`] qualify;
/// bundles are directories on disk, so no file-type filtering is applied.
/// Names are returned sorted for deterministic manifest output.
pub fn scan_bundles(dir: &Path) -> Result<Vec<String>, RegistryError> {
    let entries = std::fs::read_dir(dir).map_err(|source| RegistryError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut bundles = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RegistryError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(BUNDLE_EXTENSION) {
            bundles.push(name);
        }
    }

    bundles.sort();
    debug!("found {} bundle(s) in {}", bundles.len(), dir.display());
    Ok(bundles)
}
