//! Scan-root config file source: `<root>/.twinfold.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Name of the per-tree config file
pub const WORKSPACE_CONFIG_FILE: &str = ".twinfold.toml";

/// Add the scan root's config file to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = root.join(WORKSPACE_CONFIG_FILE);
    if path.is_file() {
        Ok(builder.add_source(File::from(path.as_path()).required(false)))
    } else {
        Ok(builder)
    }
}
