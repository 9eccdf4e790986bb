//! Configuration types for the HERO generation client.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;
use crate::error::HeroError;

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version.
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Default request timeout (120 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Environment variables consulted for the credential, in order.
pub const API_KEY_ENV_VARS: [&str; 3] = ["API_KEY", "GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Authentication method for API key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// Use x-goog-api-key header (recommended).
    #[default]
    Header,
    /// Use ?key= query parameter.
    QueryParam,
}

/// Log level for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Error level - only errors.
    Error,
    /// Warning level - errors and warnings.
    Warn,
    /// Info level - general information.
    #[default]
    Info,
    /// Debug level - detailed information.
    Debug,
    /// Trace level - very detailed information.
    Trace,
}

/// Configuration for the shared provider client.
#[derive(Clone)]
pub struct HeroConfig {
    /// API key. May be empty; the provider rejects it on first use.
    pub api_key: SecretString,
    /// Base URL for the API.
    pub base_url: Url,
    /// API version.
    pub api_version: String,
    /// Default timeout for requests.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Log level.
    pub log_level: LogLevel,
    /// Authentication method.
    pub auth_method: AuthMethod,
}

impl HeroConfig {
    /// Create a new configuration builder.
    pub fn builder() -> HeroConfigBuilder {
        HeroConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// The credential is taken from the first of `API_KEY`, `GEMINI_API_KEY` and
    /// `GOOGLE_API_KEY` that is set. A missing credential is not an error: the
    /// key is left empty so startup never fails on it.
    ///
    /// Optional overrides: `HERO_BASE_URL`, `HERO_API_VERSION`, `HERO_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, HeroError> {
        let api_key = read_api_key_from_env().unwrap_or_default();

        let base_url = std::env::var("HERO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = std::env::var("HERO_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let api_version = std::env::var("HERO_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Self::builder()
            .api_key(SecretString::new(api_key))
            .base_url(&base_url)?
            .api_version(&api_version)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
    }
}

impl std::fmt::Debug for HeroConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeroConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("auth_method", &self.auth_method)
            .finish()
    }
}

fn read_api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
}

/// Builder for HeroConfig.
#[derive(Default)]
pub struct HeroConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<Url>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    log_level: Option<LogLevel>,
    auth_method: Option<AuthMethod>,
}

impl HeroConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, HeroError> {
        self.base_url = Some(Url::parse(base_url)?);
        Ok(self)
    }

    /// Set the API version.
    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = Some(version.to_string());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the authentication method.
    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    /// Build the configuration.
    ///
    /// A missing API key becomes an empty secret rather than an error.
    pub fn build(self) -> Result<HeroConfig, HeroError> {
        let api_key = self.api_key
            .unwrap_or_else(|| SecretString::new(String::new()));

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        Ok(HeroConfig {
            api_key,
            base_url,
            api_version: self.api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout: self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            log_level: self.log_level.unwrap_or_default(),
            auth_method: self.auth_method.unwrap_or_default(),
        })
    }
}
