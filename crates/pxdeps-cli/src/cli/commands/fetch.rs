//! `pxdeps fetch` – download resources into the data root.

use super::resolve;
use anyhow::Result;
use pxdeps_core::config::PxdepsConfig;
use pxdeps_core::fetch::{fetch_resource, FetchOptions, FetchOutcome};
use pxdeps_core::registry::{self, ResourceEntry};
use std::io::Write;
use std::path::Path;

/// Every identifier is resolved before the first transfer starts.
pub fn run_fetch(
    out: &mut dyn Write,
    identifiers: &[String],
    data_root: &Path,
    cfg: &PxdepsConfig,
    overwrite: bool,
) -> Result<()> {
    let entries: Vec<&'static ResourceEntry> = if identifiers.is_empty() {
        registry::entries().iter().collect()
    } else {
        identifiers
            .iter()
            .map(|id| resolve(id))
            .collect::<Result<_>>()?
    };

    let mut opts = FetchOptions::from_config(cfg);
    opts.overwrite |= overwrite;

    for entry in entries {
        match fetch_resource(data_root, entry, opts)? {
            FetchOutcome::Skipped { path } => {
                writeln!(out, "{:<32} present  {}", entry.identifier, path.display())?;
            }
            FetchOutcome::Fetched { path, bytes } => {
                writeln!(
                    out,
                    "{:<32} fetched  {} ({} bytes)",
                    entry.identifier,
                    path.display(),
                    bytes
                )?;
            }
        }
    }
    Ok(())
}
