//! CLI for the Protenix release-resource registry.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pxdeps_core::config::{self, PxdepsConfig};
use std::io::{self, Write};
use std::path::PathBuf;

use commands::{run_fetch, run_list, run_path, run_status, run_url};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pxdeps")]
#[command(about = "Resolve and fetch Protenix release resources", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/pxdeps/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List registered resources and their URLs.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the download URL of a resource.
    Url {
        /// Resource identifier (see `pxdeps list`).
        identifier: String,
    },

    /// Print the local path a resource is placed at.
    Path {
        /// Resource identifier.
        identifier: String,
        /// Data root (overrides config).
        #[arg(long, value_name = "DIR")]
        data_root: Option<PathBuf>,
    },

    /// Show which resources are present under the data root.
    Status {
        /// Data root (overrides config).
        #[arg(long, value_name = "DIR")]
        data_root: Option<PathBuf>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Download resources into the data root (all when none are named).
    Fetch {
        /// Resource identifiers.
        identifiers: Vec<String>,
        /// Data root (overrides config).
        #[arg(long, value_name = "DIR")]
        data_root: Option<PathBuf>,
        /// Download again even if the file is already present.
        #[arg(long)]
        overwrite: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::List { json } => run_list(&mut out, json)?,
            CliCommand::Url { identifier } => run_url(&mut out, &identifier)?,
            CliCommand::Path {
                identifier,
                data_root,
            } => run_path(&mut out, &identifier, &data_root_for(&cfg, data_root)?)?,
            CliCommand::Status { data_root, json } => {
                run_status(&mut out, &data_root_for(&cfg, data_root)?, json)?
            }
            CliCommand::Fetch {
                identifiers,
                data_root,
                overwrite,
            } => {
                let root = data_root_for(&cfg, data_root)?;
                run_fetch(&mut out, &identifiers, &root, &cfg, overwrite)?;
            }
            CliCommand::Completions { shell } => {
                clap_complete::generate(shell, &mut Cli::command(), "pxdeps", &mut out);
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// True when `err` came from writing to a closed pipe (e.g. `pxdeps list | head`).
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// `--data-root` wins over the config file, which wins over the XDG default.
fn data_root_for(cfg: &PxdepsConfig, flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(root) => Ok(root),
        None => cfg.resolved_data_root(),
    }
}

#[cfg(test)]
mod tests;
