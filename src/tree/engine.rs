//! Fingerprint computation for files and folders
//!
//! A file's fingerprint is the provider digest of its bytes. A folder's
//! fingerprint is a hash chain over its children's fingerprints:
//!
//! ```text
//! acc_0 = ""
//! acc_i = hash(acc_{i-1} || fingerprint(child_i))
//! fingerprint(folder) = acc_n
//! ```
//!
//! The chain is order-sensitive, and a folder without children keeps the
//! empty accumulator as its fingerprint.

use crate::error::ScanError;
use crate::hash::{HashProvider, ProviderError};
use crate::types::Fingerprint;
use std::path::Path;

/// Derives fingerprints through a hash provider.
pub struct FingerprintEngine<'p> {
    provider: &'p dyn HashProvider,
}

impl<'p> FingerprintEngine<'p> {
    pub fn new(provider: &'p dyn HashProvider) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Fingerprint of a regular file: the digest of its contents.
    pub fn file_fingerprint(&self, path: &Path) -> Result<Fingerprint, ScanError> {
        self.provider
            .hash_file(path)
            .map_err(|e| provider_error(path, e))
    }

    /// Fold children fingerprints, in the given order, into a folder fingerprint.
    pub fn folder_fingerprint<'a, I>(&self, path: &Path, children: I) -> Result<Fingerprint, ScanError>
    where
        I: IntoIterator<Item = &'a Fingerprint>,
    {
        let mut accumulator = Fingerprint::empty();
        for child in children {
            let mut input = String::with_capacity(accumulator.as_str().len() + child.as_str().len());
            input.push_str(accumulator.as_str());
            input.push_str(child.as_str());
            accumulator = self
                .provider
                .hash_bytes(input.as_bytes())
                .map_err(|e| provider_error(path, e))?;
        }
        Ok(accumulator)
    }
}

fn provider_error(path: &Path, err: ProviderError) -> ScanError {
    match err {
        ProviderError::Unavailable(reason) => ScanError::HashUnavailable {
            path: path.to_path_buf(),
            reason,
        },
        ProviderError::Unreadable(source) => ScanError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    }
}
