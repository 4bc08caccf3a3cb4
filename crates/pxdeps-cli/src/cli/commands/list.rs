//! `pxdeps list` – registered resources and their URLs.

use anyhow::Result;
use pxdeps_core::registry;
use std::io::Write;

pub fn run_list(out: &mut dyn Write, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(registry::entries())?)?;
        return Ok(());
    }
    writeln!(out, "{:<32} {}", "IDENTIFIER", "URL")?;
    for entry in registry::entries() {
        writeln!(out, "{:<32} {}", entry.identifier, entry.location)?;
    }
    Ok(())
}
