//! Runtime configuration read from the environment.

use std::collections::HashMap;

use srs_core::get_algorithm;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
    pub algorithm: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
            algorithm: "sm2".to_string(),
        }
    }
}

impl Config {
    /// Load from the process environment, after applying any `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars().collect())
    }

    /// Build from an explicit set of variables. Missing keys fall back to defaults.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match vars.get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
            })?,
            None => defaults.port,
        };

        let algorithm = vars
            .get("SRS_ALGORITHM")
            .cloned()
            .unwrap_or(defaults.algorithm);
        if get_algorithm(&algorithm).is_none() {
            return Err(ConfigError::UnknownAlgorithm(algorithm));
        }

        Ok(Self {
            host: vars.get("HOST").cloned().unwrap_or(defaults.host),
            port,
            log_filter: vars.get("RUST_LOG").cloned().unwrap_or(defaults.log_filter),
            algorithm,
        })
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
