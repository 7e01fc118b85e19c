//! Merge rules: defaults, override order.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("hash.provider", "xxhsum")?
        .set_default("hash.xxhsum_program", "xxhsum")?
        .set_default("walk.child_order", "enumeration")?
        .set_default("removal.mode", "trash")
}
