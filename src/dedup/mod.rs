//! Duplicate folder detection and opt-in removal

pub mod detector;
pub mod removal;

pub use detector::{find_duplicates, DuplicateFolder};
pub use removal::{remove_duplicates, RemovalMode, RemovalSummary};
