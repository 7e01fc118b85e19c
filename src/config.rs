//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file,
//! then `.twinfold.toml` in the scan root, then `TWINFOLD__SECTION__KEY`
//! environment variables. CLI flags are applied last by the binary.

use crate::dedup::RemovalMode;
use crate::hash::HashAlgorithm;
use crate::logging::LoggingConfig;
use crate::tree::walker::{ChildOrder, WalkerConfig};
use serde::{Deserialize, Serialize};

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwinfoldConfig {
    #[serde(default)]
    pub hash: HashConfig,

    #[serde(default)]
    pub walk: WalkConfig,

    #[serde(default)]
    pub removal: RemovalConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which hash provider fingerprints files and folders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashConfig {
    #[serde(default)]
    pub provider: HashAlgorithm,

    /// Executable used by the `xxhsum` provider
    #[serde(default = "default_xxhsum_program")]
    pub xxhsum_program: String,
}

fn default_xxhsum_program() -> String {
    "xxhsum".to_string()
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            provider: HashAlgorithm::default(),
            xxhsum_program: default_xxhsum_program(),
        }
    }
}

/// How folders are listed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    #[serde(default)]
    pub child_order: ChildOrder,

    /// Exact entry names left out of every folder
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl WalkConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            child_order: self.child_order,
            ignore: self.ignore.clone(),
        }
    }
}

/// How flagged folders are removed when removal is requested
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovalConfig {
    #[serde(default)]
    pub mode: RemovalMode,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Hash(String),
    Walk(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Hash(msg) => write!(f, "hash: {}", msg),
            ValidationError::Walk(msg) => write!(f, "walk: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TwinfoldConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.hash.provider == HashAlgorithm::Xxhsum && self.hash.xxhsum_program.trim().is_empty()
        {
            errors.push(ValidationError::Hash(
                "xxhsum_program cannot be empty".to_string(),
            ));
        }

        for name in &self.walk.ignore {
            if name.is_empty() {
                errors.push(ValidationError::Walk("ignore entries cannot be empty".to_string()));
            } else if name.contains('/') || name.contains('\\') {
                errors.push(ValidationError::Walk(format!(
                    "ignore entry '{}' must be a plain name, not a path",
                    name
                )));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
