//! Configuration system for glossa.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GlossaError, GlossaResult};
use crate::traits::{DetectorConfig, TextLimits};

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Detection log retention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Keep at most this many records, evicting the oldest. Unbounded when
    /// unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<usize>,
}

/// Main glossa configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaConfig {
    /// Listener configuration.
    pub server: ServerConfig,
    /// Text length limits.
    pub limits: TextLimits,
    /// Detection log retention.
    pub log: LogConfig,
    /// Detector configuration.
    pub detectors: DetectorConfig,
}

impl GlossaConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> GlossaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| GlossaError::Configuration(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| GlossaError::Configuration(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| GlossaError::Configuration(e.to_string()))?,
            _ => {
                return Err(GlossaError::Configuration(
                    "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> GlossaResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `GLOSSA_*` environment variables.
    pub fn apply_env(&mut self) -> GlossaResult<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(&mut self, var: F) -> GlossaResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("GLOSSA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("GLOSSA_PORT") {
            self.server.port = parse_var("GLOSSA_PORT", &port)?;
        }
        if let Some(max) = var("GLOSSA_LOG_MAX_RECORDS") {
            self.log.max_records = Some(parse_var("GLOSSA_LOG_MAX_RECORDS", &max)?);
        }
        if let Some(seed) = var("GLOSSA_LEGACY_SEED") {
            self.detectors.legacy_seed = Some(parse_var("GLOSSA_LEGACY_SEED", &seed)?);
        }
        if let Some(min) = var("GLOSSA_MIN_CHARS") {
            self.limits.min_chars = parse_var("GLOSSA_MIN_CHARS", &min)?;
        }
        self.validate()
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> GlossaResult<()> {
        if self.limits.max_chars == 0 {
            return Err(GlossaError::Configuration(
                "limits.max_chars must be greater than zero".to_string(),
            ));
        }
        if self.limits.min_chars > self.limits.max_chars {
            return Err(GlossaError::Configuration(format!(
                "limits.min_chars ({}) exceeds limits.max_chars ({})",
                self.limits.min_chars, self.limits.max_chars
            )));
        }
        Ok(())
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> GlossaConfigBuilder {
        GlossaConfigBuilder::default()
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> GlossaResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GlossaError::Configuration(format!("{} has invalid value '{}'", key, value)))
}

/// Builder for GlossaConfig.
#[derive(Default)]
pub struct GlossaConfigBuilder {
    config: GlossaConfig,
}

impl GlossaConfigBuilder {
    /// Set the listen host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.server.host = host.into();
        self
    }

    /// Set the listen port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Set text length limits.
    pub fn limits(mut self, limits: TextLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Cap the detection log.
    pub fn max_records(mut self, max: usize) -> Self {
        self.config.log.max_records = Some(max);
        self
    }

    /// Seed the simulated legacy detector.
    pub fn legacy_seed(mut self, seed: u64) -> Self {
        self.config.detectors.legacy_seed = Some(seed);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GlossaConfig {
        self.config
    }
}
