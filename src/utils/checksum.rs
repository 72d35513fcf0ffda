//! File digests encoded as lowercase hex.
//!
//! Algorithm names follow the common `SHA-1` / `SHA-256` spelling and are
//! matched case-insensitively; the dash is optional and `SHA` alone means
//! SHA-1.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use tracing::debug;

use crate::core::{McgError, Result};

/// Digest algorithms accepted by [`hash_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Canonical name, e.g. `SHA-256`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest `data` and hex-encode the result.
    #[must_use]
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            Self::Sha1 => hex::encode(Sha1::digest(data)),
            Self::Sha224 => hex::encode(Sha224::digest(data)),
            Self::Sha256 => hex::encode(Sha256::digest(data)),
            Self::Sha384 => hex::encode(Sha384::digest(data)),
            Self::Sha512 => hex::encode(Sha512::digest(data)),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = McgError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA" | "SHA1" => Ok(Self::Sha1),
            "SHA224" => Ok(Self::Sha224),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(McgError::UnsupportedAlgorithm {
                algorithm: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash the whole content of `path` with the algorithm called `algorithm`.
///
/// # Errors
///
/// - [`McgError::UnsupportedAlgorithm`] for an unknown name (checked before
///   the file is touched)
/// - [`McgError::FileSystemError`] if the file cannot be read
pub fn hash_file(path: &Path, algorithm: &str) -> Result<String> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    let content = std::fs::read(path).map_err(|e| McgError::io("read file for hashing", path, e))?;

    debug!("Hashing {} ({} bytes) with {}", path.display(), content.len(), algorithm);
    Ok(algorithm.hex_digest(&content))
}

/// SHA-1 digest of a file.
pub fn sha1_file(path: &Path) -> Result<String> {
    hash_file(path, HashAlgorithm::Sha1.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    #[test]
    fn test_sha1_of_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(sha1_file(file.path()).unwrap(), EMPTY_SHA1);
    }

    #[test]
    fn test_known_digests() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();
        file.flush().unwrap();

        assert_eq!(
            hash_file(file.path(), "SHA-1").unwrap(),
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
        );
        assert_eq!(
            hash_file(file.path(), "sha-256").unwrap(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_repeatable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8, 1, 2, 255]).unwrap();
        file.flush().unwrap();

        let first = hash_file(file.path(), "SHA-512").unwrap();
        let second = hash_file(file.path(), "SHA512").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 128);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_algorithm_names() {
        for name in ["SHA", "sha1", "SHA-1"] {
            assert_eq!(name.parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha1);
        }
        assert_eq!("SHA-224".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha224);
        assert_eq!("sha-384".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha384);
    }

    #[test]
    fn test_unsupported_algorithm() {
        let file = NamedTempFile::new().unwrap();
        let err = hash_file(file.path(), "MD4").unwrap_err();
        assert!(matches!(err, McgError::UnsupportedAlgorithm { algorithm } if algorithm == "MD4"));
    }

    #[test]
    fn test_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let err = sha1_file(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, McgError::FileSystemError { .. }));
    }
}
