use anyhow::{Context, Result};
use reqwest::Client;

use super::{AccessToken, ClientCredentials};
use crate::config::TRANSLATOR_SCOPE;

/// Exchanges client credentials for a bearer access token.
pub struct TokenClient {
    client: Client,
    endpoint: String,
}

impl TokenClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Performs the OAuth2 client-credentials grant.
    ///
    /// The status code is intentionally not inspected: a rejection surfaces
    /// when the body fails to deserialize into an [`AccessToken`], which
    /// keeps the failure text aligned with what the service actually sent.
    pub async fn obtain(&self, creds: &ClientCredentials) -> Result<AccessToken> {
        let form = [
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("scope", TRANSLATOR_SCOPE),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .with_context(|| format!("Failed to connect to token service: {}", self.endpoint))?;

        let body = response
            .text()
            .await
            .context("Failed to read token service response")?;

        serde_json::from_str(&body).context("Token response is not valid JSON")
    }
}
