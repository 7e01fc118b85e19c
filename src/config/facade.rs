//! Config loader facade: assembles sources in precedence order.

use super::merge_policy::builder_with_defaults;
use super::sources::{global_file, workspace_file};
use super::TwinfoldConfig;
use crate::error::ApiError;
use config::{Environment, File};
use std::path::Path;

/// Loads `TwinfoldConfig` from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a scan rooted at `root`.
    ///
    /// Precedence (lowest to highest): defaults, global file, `<root>/.twinfold.toml`,
    /// `TWINFOLD__*` environment variables.
    pub fn load(root: &Path) -> Result<TwinfoldConfig, ApiError> {
        Self::load_layers(global_file::global_config_path().as_deref(), root)
    }

    /// Load configuration from one explicit file, plus environment overrides.
    pub fn load_from_file(path: &Path) -> Result<TwinfoldConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(env_source());
        Self::finish(builder.build()?)
    }

    /// Load with an explicit global file location (or none).
    pub fn load_layers(global: Option<&Path>, root: &Path) -> Result<TwinfoldConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        let builder = builder.add_source(env_source());
        Self::finish(builder.build()?)
    }

    fn finish(config: config::Config) -> Result<TwinfoldConfig, ApiError> {
        let config: TwinfoldConfig = config.try_deserialize()?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TWINFOLD")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("walk.ignore")
        .try_parsing(true)
}
