//! Configuration management for MindWatch.
//!
//! # TOML Structure
//!
//! ```toml
//! [server]
//! name = "mindwatch"
//! version = "0.1.0"
//!
//! [http]
//! bind_address = "0.0.0.0"
//! port = 8000
//! cors_allowed_origins = ["http://localhost:3000", "http://localhost:8000"]
//! max_payload_size = 1048576
//! enforce_consent = false
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! include_location = false
//!
//! [fusion]
//! vision = 0.3
//! audio = 0.3
//! text = 0.2
//! context = 0.2
//!
//! [encoder]
//! epsilon = 1e-8
//! ```
//!
//! Every table and field is optional; missing values take their defaults.
//! Invalid values are rejected by [`Config::validate`], never corrected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::Modality;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Attention weights of the fusion engine.
    #[serde(default)]
    pub fusion: AttentionWeights,
    #[serde(default)]
    pub encoder: EncoderConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Sources are layered in order, later ones winning:
    /// 1. `config/default.toml`
    /// 2. `config/{MINDWATCH_ENV}.toml` (`MINDWATCH_ENV` defaults to `development`)
    /// 3. Environment variables such as `MINDWATCH__HTTP__PORT=9000`
    ///
    /// Files are optional. The merged result is validated.
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("MINDWATCH_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("MINDWATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("http.cors_allowed_origins")
                    .try_parsing(true),
            );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(
            env = %env,
            port = config.http.port,
            weights = ?config.fusion,
            "Configuration loaded from layered sources"
        );
        Ok(config)
    }

    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            CoreError::ConfigError(format!("{} ({})", e, path.display()))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string without validating it.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        toml::from_str(toml)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CoreError::ConfigError(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Validate all nested configuration, returning the first error found.
    pub fn validate(&self) -> CoreResult<()> {
        self.http
            .validate()
            .map_err(|e| CoreError::ConfigError(format!("[http] {}", e)))?;
        self.fusion
            .validate()
            .map_err(|e| CoreError::ConfigError(format!("[fusion] {}", e)))?;
        self.encoder
            .validate()
            .map_err(|e| CoreError::ConfigError(format!("[encoder] {}", e)))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "MindWatch API".to_string(),
            version: "0.1.0".to_string(),
        }
    }
}

/// HTTP transport settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind_address: String,
    pub port: u16,
    /// Origins allowed by CORS. Credentials are allowed for these origins.
    pub cors_allowed_origins: Vec<String>,
    /// Maximum accepted request body, in bytes.
    pub max_payload_size: usize,
    /// Reject embeddings for modalities whose consent flag is false.
    pub enforce_consent: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            cors_allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8000".to_string(),
            ],
            max_payload_size: 1_048_576, // 1MB
            enforce_consent: false,
        }
    }
}

impl HttpConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.bind_address.trim().is_empty() {
            return Err(CoreError::ConfigError("bind_address cannot be empty".into()));
        }
        if self.max_payload_size == 0 {
            return Err(CoreError::ConfigError(
                "max_payload_size must be greater than 0".into(),
            ));
        }
        if let Some(bad) = self
            .cors_allowed_origins
            .iter()
            .find(|o| o.trim().is_empty() || o.chars().any(char::is_whitespace))
        {
            return Err(CoreError::ConfigError(format!(
                "invalid CORS origin '{}'",
                bad
            )));
        }
        Ok(())
    }

    /// `bind_address:port`.
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

/// Fixed attention weight per modality.
///
/// Weights need not sum to 1.0; the fusion engine normalizes over the
/// modalities present in each request.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AttentionWeights {
    pub vision: f32,
    pub audio: f32,
    pub text: f32,
    pub context: f32,
}

impl Default for AttentionWeights {
    fn default() -> Self {
        Self {
            vision: 0.3,
            audio: 0.3,
            text: 0.2,
            context: 0.2,
        }
    }
}

impl AttentionWeights {
    pub fn weight(&self, modality: Modality) -> f32 {
        match modality {
            Modality::Vision => self.vision,
            Modality::Audio => self.audio,
            Modality::Text => self.text,
            Modality::Context => self.context,
        }
    }

    /// Every weight must be finite and strictly positive, and so must their sum.
    pub fn validate(&self) -> CoreResult<()> {
        for modality in Modality::ALL {
            let w = self.weight(modality);
            if !w.is_finite() || w <= 0.0 {
                return Err(CoreError::ConfigError(format!(
                    "{} weight must be finite and > 0, got {}",
                    modality, w
                )));
            }
        }
        let total: f32 = Modality::ALL.into_iter().map(|m| self.weight(m)).sum();
        if !total.is_finite() {
            return Err(CoreError::ConfigError(format!(
                "sum of weights must be finite, got {}",
                total
            )));
        }
        Ok(())
    }
}

/// Settings shared by the standardizing encoders.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Added to the standard deviation before dividing.
    pub epsilon: f64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { epsilon: 1e-8 }
    }
}

impl EncoderConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(CoreError::ConfigError(format!(
                "epsilon must be finite and > 0, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
