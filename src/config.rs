//! Service constants and environment-backed configuration.
//!
//! Everything the driver needs from the outside world is collected here
//! once at startup and passed down explicitly: credentials and endpoint
//! URLs never get read ad hoc from deeper layers.

use std::env;

/// OAuth2 scope identifier required by the token service.
pub const TRANSLATOR_SCOPE: &str = "http://api.microsofttranslator.com";

/// Azure DataMarket OAuth2 token service.
pub const TOKEN_SERVICE_URL: &str = "https://datamarket.accesscontrol.windows.net/v2/OAuth2-13";

/// Microsoft Translator HTTP API endpoint.
pub const TRANSLATE_ENDPOINT_URL: &str = "http://api.microsofttranslator.com/V2/Http.svc/Translate";

/// Resolved service URLs for one invocation.
///
/// The environment variables `BTRANSLATE_TOKEN_URL` and
/// `BTRANSLATE_TRANSLATE_URL` override the fixed service constants; they
/// exist mainly so the end-to-end tests can point the binary at a local
/// mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub token_url: String,
    pub translate_url: String,
}

impl Endpoints {
    pub fn from_env() -> Self {
        Self {
            token_url: env_or("BTRANSLATE_TOKEN_URL", TOKEN_SERVICE_URL),
            translate_url: env_or("BTRANSLATE_TRANSLATE_URL", TRANSLATE_ENDPOINT_URL),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
