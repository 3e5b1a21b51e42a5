//! Application configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate.
//! Each sub-module represents a logical configuration section.

pub mod data;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::logging::LoggingConfig;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (default file + environment overlay + `FOLDERHUB_`-prefixed variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Fixture data settings.
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific
    /// overlay and environment variables prefixed with `FOLDERHUB_`.
    /// When `FOLDERHUB_CONFIG` names an explicit config file, it is
    /// merged on top of the conventional `config/` files. Missing
    /// conventional files are tolerated; all sections carry defaults.
    pub fn load(env: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        if let Ok(path) = std::env::var("FOLDERHUB_CONFIG") {
            builder = builder.add_source(config::File::from(std::path::Path::new(&path)));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("FOLDERHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
