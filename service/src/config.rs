use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with CG_ prefix (always wins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// API key forwarded on every upstream call (required — no compiled-in
    /// default). Never logged.
    #[serde(default)]
    pub api_key: String,

    /// Upstream API base path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum admitted calls per rolling window.
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,

    /// Rolling window length in hours.
    #[serde(default = "default_window_hours")]
    pub window_hours: u64,

    /// Reserved: exponential backoff on upstream throttling. Nothing in the
    /// execution path consults this yet.
    #[serde(default)]
    pub retry_on_throttle: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP server bind address.
    #[serde(default = "default_host")]
    pub host: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "https://api.congress.gov/v3".to_string()
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_timeout_secs() -> u64 {
    30
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_requests() -> usize {
    5000
}

#[allow(clippy::missing_const_for_fn)]
fn default_window_hours() -> u64 {
    1
}

#[allow(clippy::missing_const_for_fn)]
fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig {
                api_key: String::new(),
                base_url: default_base_url(),
                timeout_secs: default_timeout_secs(),
                max_requests: default_max_requests(),
                window_hours: default_window_hours(),
                retry_on_throttle: false,
            },
            server: ServerConfig {
                port: default_port(),
                host: default_host(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. config.yaml file (if exists)
    /// 3. Environment variables with CG_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_figment(Figment::new().merge(Serialized::defaults(Self::default())).merge(
            Yaml::file("config.yaml"),
        ))
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        Self::load_figment(
            Figment::new()
                .merge(Serialized::defaults(Self::default()))
                .merge(Yaml::file(yaml_path)),
        )
    }

    fn load_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.merge(Env::prefixed("CG_").split("__")).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // API key is required
        if self.upstream.api_key.is_empty() {
            return Err(ConfigError::Validation(
                "upstream.api_key is required. Set CG_UPSTREAM__API_KEY environment variable or configure in config.yaml.".into(),
            ));
        }

        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "upstream.base_url must start with http:// or https://, got: '{}'",
                self.upstream.base_url
            )));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "upstream.timeout_secs cannot be 0".into(),
            ));
        }

        if self.upstream.max_requests == 0 {
            return Err(ConfigError::Validation(
                "upstream.max_requests cannot be 0".into(),
            ));
        }

        if self.upstream.window_hours == 0 {
            return Err(ConfigError::Validation(
                "upstream.window_hours cannot be 0".into(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".into()));
        }

        Ok(())
    }
}
