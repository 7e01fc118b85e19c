//! In-process hash providers.

use super::{HashProvider, ProviderError};
use crate::types::Fingerprint;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use xxhash_rust::xxh64::{xxh64, Xxh64};

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Feed a file to `update` in fixed-size chunks.
fn stream_file<F>(path: &Path, mut update: F) -> Result<(), ProviderError>
where
    F: FnMut(&[u8]),
{
    let mut file = File::open(path)?;
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ProviderError::Unreadable(e)),
        };
        update(&buffer[..read]);
    }
    Ok(())
}

/// XXH64 with seed 0, rendered as 16 lowercase hex digits.
///
/// Matches the digest `xxhsum` prints for its default algorithm, without
/// spawning a process per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh64Provider;

fn xxh64_digest(value: u64) -> Fingerprint {
    Fingerprint::from(format!("{:016x}", value))
}

impl HashProvider for Xxh64Provider {
    fn name(&self) -> &'static str {
        "xxh64"
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Fingerprint, ProviderError> {
        Ok(xxh64_digest(xxh64(data, 0)))
    }

    fn hash_file(&self, path: &Path) -> Result<Fingerprint, ProviderError> {
        let mut hasher = Xxh64::new(0);
        stream_file(path, |chunk| hasher.update(chunk))?;
        Ok(xxh64_digest(hasher.digest()))
    }
}

/// BLAKE3, hex encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Provider;

impl HashProvider for Blake3Provider {
    fn name(&self) -> &'static str {
        "blake3"
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Fingerprint, ProviderError> {
        Ok(Fingerprint::from(hex::encode(blake3::hash(data).as_bytes())))
    }

    fn hash_file(&self, path: &Path) -> Result<Fingerprint, ProviderError> {
        let mut hasher = blake3::Hasher::new();
        stream_file(path, |chunk| {
            hasher.update(chunk);
        })?;
        Ok(Fingerprint::from(hex::encode(hasher.finalize().as_bytes())))
    }
}
