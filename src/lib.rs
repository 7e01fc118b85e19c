//! twinfold: duplicate folder detection by chained content fingerprints
//!
//! Every file gets the digest of its bytes; every folder gets a hash chain
//! over its children's fingerprints. Folders whose fingerprint was already
//! seen earlier in the (bottom-up) build order are flagged as duplicates.

pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod hash;
pub mod logging;
pub mod scan;
pub mod tree;
pub mod types;
