use crate::dataset::MissingFieldPolicy;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub training: TrainingConfig,
    pub notify: NotifyConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Optional CSV to load and train on at startup
    pub path: Option<String>,
    pub missing_field_policy: MissingFieldPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingConfig {
    /// Fraction of records used for training (rest is held out)
    pub split_ratio: f64,
    /// Seed for the shuffle before splitting, fixed for reproducibility
    pub seed: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    pub enabled: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::ClassifierError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::ClassifierError::Config(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:8080".to_string(),
            },
            dataset: DatasetConfig {
                path: None,
                missing_field_policy: MissingFieldPolicy::TreatAsEmpty,
            },
            training: TrainingConfig {
                split_ratio: 0.8,
                seed: 42,
            },
            notify: NotifyConfig {
                enabled: false,
                smtp_host: "smtp.gmail.com".to_string(),
                smtp_port: 587,
                username: String::new(),
                password: String::new(),
                from_address: String::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
