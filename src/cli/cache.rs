//! `mcgradle cache` - inspect or clear the cached documents.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use super::common::{ProjectOptions, ProjectSession};
use crate::constants::{VERSION_DATA_LOCATION, VERSION_MANIFEST_LOCATION};
use crate::utils::fs::remove_file_if_exists;

#[derive(Args, Debug)]
pub struct CacheCommand {
    #[command(subcommand)]
    command: CacheSubcommand,
}

#[derive(Subcommand, Debug)]
enum CacheSubcommand {
    /// Show where the cached documents live and whether they exist
    Info,
    /// Delete the cached documents of this project's version
    Clean,
}

impl CacheCommand {
    pub fn execute(self, options: &ProjectOptions) -> Result<()> {
        let session = ProjectSession::open(options)?;
        let files = cached_files(&session)?;

        match self.command {
            CacheSubcommand::Info => {
                println!("cache root\t{}", session.instance.cache_dir.display());
                for (label, path) in files {
                    let state = if path.is_file() {
                        "present".green()
                    } else {
                        "missing".yellow()
                    };
                    println!("{label}\t{}\t{state}", path.display());
                }
            }
            CacheSubcommand::Clean => {
                let mut removed = 0;
                for (_, path) in files {
                    if remove_file_if_exists(&path)? {
                        removed += 1;
                    }
                }
                println!("Removed {removed} cached file(s)");
            }
        }
        Ok(())
    }
}

fn cached_files(session: &ProjectSession) -> Result<Vec<(&'static str, PathBuf)>> {
    let registry = &session.registry;
    Ok(vec![
        ("manifest", registry.resolve_path(session.context, VERSION_MANIFEST_LOCATION)?),
        ("version", registry.resolve_path(session.context, VERSION_DATA_LOCATION)?),
    ])
}
