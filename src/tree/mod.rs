//! Filesystem fingerprint tree
//!
//! Every file and folder under a root gets a content fingerprint. Folder
//! fingerprints are derived from their children's, so two folders with the
//! same fingerprint hold the same content.

pub mod builder;
pub mod cache;
pub mod engine;
pub mod path;
pub mod walker;
