use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use super::loader::load_bytes;
use super::model::SwimDataset;

/// Identity of an input file: where it lives and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey {
    pub path: PathBuf,
    pub digest: String,
}

impl SourceKey {
    fn new(path: &Path, bytes: &[u8]) -> Self {
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        SourceKey {
            path,
            digest: format!("{:x}", Sha256::digest(bytes)),
        }
    }
}

/// Memoises the canonical table of the last loaded file.
///
/// The table is only rebuilt when the path or the file content changes.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(SourceKey, Arc<SwimDataset>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical table for `path`, parsing only on a cache miss.
    ///
    /// A failed load leaves the previous entry in place.
    pub fn load(&mut self, path: &Path) -> Result<Arc<SwimDataset>> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let key = SourceKey::new(path, &bytes);

        if let Some((cached_key, dataset)) = &self.entry {
            if *cached_key == key {
                log::debug!("dataset cache hit for {}", key.path.display());
                return Ok(Arc::clone(dataset));
            }
        }

        let dataset = Arc::new(
            load_bytes(&bytes).with_context(|| format!("loading {}", path.display()))?,
        );
        log::debug!("dataset cache miss for {} ({})", key.path.display(), key.digest);
        self.entry = Some((key, Arc::clone(&dataset)));
        Ok(dataset)
    }

    pub fn key(&self) -> Option<&SourceKey> {
        self.entry.as_ref().map(|(key, _)| key)
    }
}
