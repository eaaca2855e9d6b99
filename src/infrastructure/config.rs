use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::model_descriptor::ModelDescriptor;
use crate::domain::models::tokenization::FallbackPolicy;
use crate::infrastructure::repositories::dispatching_tokenizer_repository::DEFAULT_STAND_IN_REPOSITORY;

pub const CONFIG_PATH_ENV: &str = "TOKEN_COUNTER_CONFIG";
const BIND_ENV: &str = "TOKEN_COUNTER_BIND";
const WORKERS_ENV: &str = "TOKEN_COUNTER_WORKERS";
const LOG_DIR_ENV: &str = "TOKEN_COUNTER_LOG_DIR";
const OFFLINE_ENV: &str = "TOKEN_COUNTER_OFFLINE";
const HF_TOKEN_ENV: &str = "HF_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub enabled: bool,
    pub cache_dir: Option<PathBuf>,
    pub token: Option<String>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: None,
            token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub worker_threads: usize,
    pub log_dir: PathBuf,
    pub stand_in_tokenizer: String,
    pub fallback: FallbackPolicy,
    pub hub: HubConfig,
    pub models: Vec<ModelDescriptor>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            worker_threads: 4,
            log_dir: PathBuf::from("logs"),
            stand_in_tokenizer: DEFAULT_STAND_IN_REPOSITORY.to_string(),
            fallback: FallbackPolicy::default(),
            hub: HubConfig::default(),
            models: ModelDescriptor::defaults(),
        }
    }
}

impl ServiceConfig {
    /// Defaults, then the YAML file named by `TOKEN_COUNTER_CONFIG`, then
    /// individual environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        Self::from_yaml(&raw).map_err(|error| match error {
            ConfigError::Invalid(message) => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|error| ConfigError::Invalid(error.to_string()))
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind_address) = lookup(BIND_ENV) {
            self.bind_address = bind_address;
        }

        if let Some(workers) = lookup(WORKERS_ENV) {
            self.worker_threads = workers.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be a positive integer, got '{}'", WORKERS_ENV, workers))
            })?;
        }

        if let Some(log_dir) = lookup(LOG_DIR_ENV) {
            self.log_dir = PathBuf::from(log_dir);
        }

        if let Some(offline) = lookup(OFFLINE_ENV) {
            let offline = offline.trim().to_ascii_lowercase();
            self.hub.enabled = !matches!(offline.as_str(), "1" | "true" | "yes" | "on");
        }

        if let Some(token) = lookup(HF_TOKEN_ENV).filter(|token| !token.trim().is_empty()) {
            self.hub.token = Some(token);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        if self.worker_threads == 0 {
            return Err(ConfigError::Invalid(
                "worker_threads must be at least 1".to_string(),
            ));
        }

        if self.models.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one model must be listed".to_string(),
            ));
        }

        if let Some(model) = self.models.iter().find(|model| model.id.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "model '{}' has an empty id",
                model.display_name
            )));
        }

        if self.stand_in_tokenizer.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "stand_in_tokenizer must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address.parse().map_err(|error| {
            ConfigError::Invalid(format!(
                "bind_address '{}' is not a socket address: {}",
                self.bind_address, error
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{ConfigError, ServiceConfig};
    use crate::domain::models::tokenization::FallbackPolicy;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = ServiceConfig::default();

        config.validate().expect("defaults should validate");
        assert_eq!(config.worker_threads, 4);
        assert!(config.hub.enabled);
        assert_eq!(config.fallback, FallbackPolicy::Never);
        assert_eq!(config.socket_addr().expect("addr").port(), 5000);
    }

    #[test]
    fn empty_yaml_means_defaults() {
        assert_eq!(
            ServiceConfig::from_yaml("  \n").expect("empty config"),
            ServiceConfig::default()
        );
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = ServiceConfig::from_yaml(
            r#"
bind_address: "0.0.0.0:8080"
fallback: any_failure
hub:
  enabled: false
models:
  - { id: "gpt-4", name: "GPT-4" }
"#,
        )
        .expect("yaml should parse");

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.fallback, FallbackPolicy::AnyFailure);
        assert!(!config.hub.enabled);
        assert_eq!(config.hub.token, None);
        assert_eq!(config.models.len(), 1);
        assert_eq!(config.models[0].display_name, "GPT-4");
        assert_eq!(config.worker_threads, 4);
    }

    #[test]
    fn unknown_fallback_is_rejected() {
        assert!(matches!(
            ServiceConfig::from_yaml("fallback: sometimes"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut config = ServiceConfig::default();
        config
            .apply_overrides(lookup(&[
                ("TOKEN_COUNTER_BIND", "0.0.0.0:9000"),
                ("TOKEN_COUNTER_WORKERS", "8"),
                ("TOKEN_COUNTER_LOG_DIR", "/tmp/token-counter"),
                ("TOKEN_COUNTER_OFFLINE", "true"),
                ("HF_TOKEN", "hf_secret"),
            ]))
            .expect("overrides should apply");

        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.worker_threads, 8);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/token-counter"));
        assert!(!config.hub.enabled);
        assert_eq!(config.hub.token.as_deref(), Some("hf_secret"));
    }

    #[test]
    fn bad_worker_override_is_an_error() {
        let mut config = ServiceConfig::default();
        let result = config.apply_overrides(lookup(&[("TOKEN_COUNTER_WORKERS", "many")]));

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validation_rejects_broken_values() {
        let mut config = ServiceConfig::default();
        config.worker_threads = 0;
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::default();
        config.bind_address = "localhost".to_string();
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::default();
        config.models.clear();
        assert!(config.validate().is_err());
    }
}
