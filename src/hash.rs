//! Hash providers
//!
//! The fingerprint engine treats hashing as an opaque pure function with two
//! entry points: digest a byte string, or digest a file's contents. Three
//! providers are available:
//!
//! - `xxhsum`: the external `xxhsum` tool, one process per call
//! - `xxh64`: in-process XXH64 (seed 0), digest-compatible with `xxhsum`
//! - `blake3`: in-process BLAKE3

mod native;
mod process;

pub use native::{Blake3Provider, Xxh64Provider};
pub use process::XxhsumProvider;

use crate::types::Fingerprint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Failure reported by a hash provider, before it is tied to a tree path.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The hash primitive could not run or produced no digest.
    #[error("{0}")]
    Unavailable(String),

    /// The content to hash could not be read.
    #[error("{0}")]
    Unreadable(#[from] std::io::Error),
}

/// Deterministic digest of bytes and of file contents.
pub trait HashProvider {
    /// Short provider name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Digest an in-memory byte string.
    fn hash_bytes(&self, data: &[u8]) -> Result<Fingerprint, ProviderError>;

    /// Digest the contents of the file at `path`.
    fn hash_file(&self, path: &Path) -> Result<Fingerprint, ProviderError>;
}

/// Selects which provider a scan uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Xxhsum,
    Xxh64,
    Blake3,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Xxhsum => "xxhsum",
            HashAlgorithm::Xxh64 => "xxh64",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xxhsum" => Ok(HashAlgorithm::Xxhsum),
            "xxh64" => Ok(HashAlgorithm::Xxh64),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(format!(
                "Unknown hash provider '{}' (expected xxhsum, xxh64 or blake3)",
                other
            )),
        }
    }
}

/// Build the provider selected by `algorithm`.
///
/// `xxhsum_program` is only used by the external-process provider.
pub fn build_provider(algorithm: HashAlgorithm, xxhsum_program: &str) -> Box<dyn HashProvider> {
    match algorithm {
        HashAlgorithm::Xxhsum => Box::new(XxhsumProvider::with_program(xxhsum_program)),
        HashAlgorithm::Xxh64 => Box::new(Xxh64Provider),
        HashAlgorithm::Blake3 => Box::new(Blake3Provider),
    }
}
