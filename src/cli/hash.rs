//! `mcgradle hash` - hex digest of a file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::utils::checksum::{HashAlgorithm, hash_file};

/// Print the digest of a file.
#[derive(Args, Debug)]
pub struct HashCommand {
    /// File to hash
    file: PathBuf,

    /// Digest algorithm: SHA-1, SHA-224, SHA-256, SHA-384 or SHA-512
    #[arg(short, long, default_value = HashAlgorithm::Sha1.name())]
    algorithm: String,
}

impl HashCommand {
    pub fn execute(self) -> Result<()> {
        let digest = hash_file(&self.file, &self.algorithm)?;
        println!("{digest}");
        Ok(())
    }
}
