//! `pxdeps url` – print the URL of one resource.

use super::resolve;
use anyhow::Result;
use std::io::Write;

pub fn run_url(out: &mut dyn Write, identifier: &str) -> Result<()> {
    writeln!(out, "{}", resolve(identifier)?.location)?;
    Ok(())
}
