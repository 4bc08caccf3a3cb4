//! Single-GET fetcher for registry resources.
//!
//! The body is streamed into `<dest>.part` and renamed onto `dest` only after
//! a 2xx response, so an interrupted fetch never leaves a truncated file at
//! the destination. One attempt per call.

use crate::config::PxdepsConfig;
use crate::layout;
use crate::registry::ResourceEntry;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Transfer settings for a fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    /// Replace an existing destination file instead of skipping it.
    pub overwrite: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&PxdepsConfig::default())
    }
}

impl FetchOptions {
    pub fn from_config(cfg: &PxdepsConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            overwrite: cfg.overwrite,
        }
    }
}

/// What `fetch_resource` did for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Destination already existed; nothing was transferred.
    Skipped { path: PathBuf },
    Fetched { path: PathBuf, bytes: u64 },
}

/// Fetches `entry` into its place under `root`.
pub fn fetch_resource(
    root: &Path,
    entry: &ResourceEntry,
    opts: FetchOptions,
) -> Result<FetchOutcome> {
    fetch_entry_from(entry.location, root, entry, opts)
}

/// Like `fetch_resource`, but downloads from `url` instead of the entry's
/// registered location (mirrors, local test servers).
pub fn fetch_entry_from(
    url: &str,
    root: &Path,
    entry: &ResourceEntry,
    opts: FetchOptions,
) -> Result<FetchOutcome> {
    let path = layout::destination(root, entry);
    if !opts.overwrite && path.is_file() {
        tracing::info!(
            "skip {}: already present at {}",
            entry.identifier,
            path.display()
        );
        return Ok(FetchOutcome::Skipped { path });
    }
    tracing::info!("fetch {} from {}", entry.identifier, url);
    let bytes =
        fetch_to(url, &path, opts).with_context(|| format!("fetch {}", entry.identifier))?;
    Ok(FetchOutcome::Fetched { path, bytes })
}

/// Downloads `url` to `dest` with one GET. Returns the number of bytes written.
///
/// `<dest>.part` is removed whenever this returns an error.
pub fn fetch_to(url: &str, dest: &Path, opts: FetchOptions) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let part = part_path(dest);
    let result = get_into(url, &part, opts).and_then(|written| {
        fs::rename(&part, dest)
            .with_context(|| format!("rename {} -> {}", part.display(), dest.display()))?;
        Ok(written)
    });
    match result {
        Ok(written) => {
            tracing::debug!("wrote {} bytes to {}", written, dest.display());
            Ok(written)
        }
        Err(e) => {
            let _ = fs::remove_file(&part);
            Err(e)
        }
    }
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name: OsString = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

fn get_into(url: &str, part: &Path, opts: FetchOptions) -> Result<u64> {
    let mut file =
        fs::File::create(part).with_context(|| format!("create {}", part.display()))?;
    let mut written: u64 = 0;
    let mut write_err: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };
    if let Some(e) = write_err {
        return Err(e).with_context(|| format!("write {}", part.display()));
    }
    performed.context("GET request failed")?;

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    file.flush()?;
    file.sync_all()
        .with_context(|| format!("sync {}", part.display()))?;
    Ok(written)
}
