//! OAuth2 client-credentials types.

mod client;

pub use client::TokenClient;

use serde::Deserialize;
use std::env;

/// Application identifier/secret pair proving the caller's identity to the
/// token service.
///
/// Read once at startup. Empty values are passed through as-is: the token
/// service is the authority on whether credentials are valid.
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    /// Reads `BTRANSLATE_CLIENT_ID` and `BTRANSLATE_CLIENT_SECRET` from the
    /// environment, defaulting to the empty string when unset.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("BTRANSLATE_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("BTRANSLATE_CLIENT_SECRET").unwrap_or_default(),
        }
    }
}

// Custom Debug impl that never logs the secret
impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Short-lived bearer credential returned by the token service.
///
/// Obtained exactly once per invocation and reused for both the forward and
/// the reverse translation call; there is no refresh logic.
#[derive(Clone, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "access_token")]
    pub token: String,
    /// Lifetime in seconds. The service sends it as a string.
    #[serde(rename = "expires_in")]
    pub expires_in: String,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
