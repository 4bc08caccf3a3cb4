//! `pxdeps status` – present/missing state of every resource.

use anyhow::Result;
use pxdeps_core::layout;
use std::io::Write;
use std::path::Path;

pub fn run_status(out: &mut dyn Write, data_root: &Path, json: bool) -> Result<()> {
    let placements = layout::inspect(data_root)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&placements)?)?;
        return Ok(());
    }
    writeln!(out, "{:<32} {:<8} {:<12} {}", "IDENTIFIER", "STATE", "SIZE", "PATH")?;
    for p in placements {
        let (state, size) = match p.size {
            Some(s) => ("present", s.to_string()),
            None => ("missing", "-".to_string()),
        };
        writeln!(
            out,
            "{:<32} {:<8} {:<12} {}",
            p.entry.identifier,
            state,
            size,
            p.path.display()
        )?;
    }
    Ok(())
}
