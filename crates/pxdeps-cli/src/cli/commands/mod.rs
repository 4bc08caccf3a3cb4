//! CLI command handlers, one per file.

mod fetch;
mod list;
mod path;
mod status;
mod url;

pub use fetch::run_fetch;
pub use list::run_list;
pub use path::run_path;
pub use status::run_status;
pub use url::run_url;

use anyhow::Result;
use pxdeps_core::registry::{self, ResourceEntry};

/// Resolves `identifier`, naming the known identifiers when it is unknown.
pub(crate) fn resolve(identifier: &str) -> Result<&'static ResourceEntry> {
    registry::get(identifier).map_err(|err| {
        let known: Vec<_> = registry::identifiers().collect();
        tracing::warn!("{}", err);
        anyhow::anyhow!("{} (known: {})", err, known.join(", "))
    })
}
