// lib/src/config/config_helpers.rs

use std::fs;
use std::path::Path;

use config::{Config, Environment, File};
use log::{debug, error, info};

use models::errors::{RecommendError, RecommendResult};

use crate::config::config_defaults::*;
use crate::config::config_structs::{RecommenderConfig, RecommenderConfigWrapper};

/// Loads the engine configuration.
///
/// Sources, lowest precedence first: built-in defaults, the YAML file at
/// `path` (or `pawmatch.yaml` in the working directory, skipped when absent),
/// then `PAWMATCH__RECOMMENDER__*` environment variables, e.g.
/// `PAWMATCH__RECOMMENDER__SMOOTHING__PRIOR_NUMERATOR=7`.
pub fn load_recommender_config(path: Option<&Path>) -> RecommendResult<RecommenderConfig> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults and environment", config_path);
    }

    let settings = Config::builder()
        .add_source(File::from(config_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .separator(CONFIG_ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()
        .map_err(|e| {
            error!("Failed to build configuration from {:?}: {}", config_path, e);
            RecommendError::ConfigurationError(format!("Failed to build configuration: {}", e))
        })?;

    let wrapper: RecommenderConfigWrapper = settings.try_deserialize().map_err(|e| {
        RecommendError::ConfigurationError(format!("Failed to deserialize configuration: {}", e))
    })?;

    let validated = wrapper.recommender.validate()?;
    debug!("Loaded recommender configuration: {:?}", validated);
    Ok(validated)
}

impl RecommenderConfig {
    /// Reads a YAML file with a top-level `recommender:` key, without
    /// environment overrides.
    pub fn load_from_yaml(path: &Path) -> RecommendResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read config file at {:?}: {}", path, e);
            RecommendError::Io(e)
        })?;
        let wrapper: RecommenderConfigWrapper = serde_yaml::from_str(&content).map_err(|e| {
            error!("Failed to deserialize YAML from {:?}: {}", path, e);
            RecommendError::ConfigurationError(format!("Failed to deserialize YAML: {}", e))
        })?;
        let validated = wrapper.recommender.validate()?;
        info!("Loaded recommender configuration from {:?}", path);
        Ok(validated)
    }

    pub fn save_to_yaml(&self, path: &Path) -> RecommendResult<()> {
        let wrapper = RecommenderConfigWrapper { recommender: *self };
        let yaml_string = serde_yaml::to_string(&wrapper).map_err(|e| {
            RecommendError::ConfigurationError(format!("Failed to serialize configuration: {}", e))
        })?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, yaml_string.as_bytes())?;
        info!("Saved recommender configuration to {:?}", path);
        Ok(())
    }
}
