//! `pxdeps path` – print where a resource is placed locally.

use super::resolve;
use anyhow::Result;
use pxdeps_core::layout;
use std::io::Write;
use std::path::Path;

pub fn run_path(out: &mut dyn Write, identifier: &str, data_root: &Path) -> Result<()> {
    let entry = resolve(identifier)?;
    writeln!(out, "{}", layout::destination(data_root, entry).display())?;
    Ok(())
}
