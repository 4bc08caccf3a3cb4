//! Where registry resources live on local disk.
//!
//! Mirrors the Protenix release tree: checkpoints under `checkpoint/`, CCD
//! files under `ccd_cache/`, each named after the last segment of its URL.

use crate::registry::{self, ResourceEntry, ResourceKind};
use crate::url_model::derive_filename;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Subdirectory of the data root a resource kind is placed in.
pub fn subdir(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::ModelCheckpoint => "checkpoint",
        ResourceKind::CcdComponents | ResourceKind::CcdRdkitMol => "ccd_cache",
    }
}

/// Full destination path of `entry` under `root`.
pub fn destination(root: &Path, entry: &ResourceEntry) -> PathBuf {
    root.join(subdir(entry.kind)).join(derive_filename(entry.location))
}

/// Local state of one registered resource.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub entry: &'static ResourceEntry,
    pub path: PathBuf,
    /// Size in bytes when a regular file exists at `path`.
    pub size: Option<u64>,
}

impl Placement {
    pub fn is_present(&self) -> bool {
        self.size.is_some()
    }
}

/// Checks every registered resource against `root`.
pub fn inspect(root: &Path) -> Result<Vec<Placement>> {
    registry::entries()
        .iter()
        .map(|entry| {
            let path = destination(root, entry);
            let size = file_size(&path)?;
            Ok(Placement { entry, path, size })
        })
        .collect()
}

fn file_size(path: &Path) -> Result<Option<u64>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("stat {}", path.display())),
    }
}
