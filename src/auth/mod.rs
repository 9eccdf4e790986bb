//! Credential placement for provider requests.

use secrecy::{ExposeSecret, SecretString};

use crate::config::{AuthMethod, HeroConfig};

/// Header carrying the key when [`AuthMethod::Header`] is used.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Query parameter carrying the key when [`AuthMethod::QueryParam`] is used.
pub const API_KEY_QUERY_PARAM: &str = "key";

/// Supplies the credential attached to every provider request.
pub trait AuthManager: Send + Sync {
    /// Header name and value, when the credential travels as a header.
    fn get_auth_header(&self) -> Option<(String, String)>;

    /// Query parameter name and value, when the credential travels in the URL.
    fn get_auth_query_param(&self) -> Option<(String, String)>;

    /// False when no credential was configured. Requests are still sent and
    /// the provider rejects them with an authentication failure.
    fn has_credential(&self) -> bool;
}

/// Places the API key according to the configured [`AuthMethod`].
///
/// An empty key is still sent as-is; the provider answers with an
/// authentication error, which is how a missing credential surfaces.
pub struct ApiKeyAuthManager {
    api_key: SecretString,
    auth_method: AuthMethod,
}

impl ApiKeyAuthManager {
    /// Create a manager for `api_key`.
    pub fn new(api_key: SecretString, auth_method: AuthMethod) -> Self {
        Self { api_key, auth_method }
    }

    /// Create from config.
    pub fn from_config(config: &HeroConfig) -> Self {
        Self::new(config.api_key.clone(), config.auth_method)
    }

    /// The configured placement.
    pub fn auth_method(&self) -> AuthMethod {
        self.auth_method
    }

    fn placed(&self, method: AuthMethod, name: &str) -> Option<(String, String)> {
        (self.auth_method == method)
            .then(|| (name.to_string(), self.api_key.expose_secret().clone()))
    }
}

impl AuthManager for ApiKeyAuthManager {
    fn get_auth_header(&self) -> Option<(String, String)> {
        self.placed(AuthMethod::Header, API_KEY_HEADER)
    }

    fn get_auth_query_param(&self) -> Option<(String, String)> {
        self.placed(AuthMethod::QueryParam, API_KEY_QUERY_PARAM)
    }

    fn has_credential(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}
