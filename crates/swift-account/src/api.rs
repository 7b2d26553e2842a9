use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use swift_tempurl::{AccountError, AccountKeyReader, AccountKeyWriter};
use tracing::debug;
use url::Url;

use crate::config::SwiftAccountConfig;
use crate::error::ConfigError;

pub const AUTH_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-auth-token");
pub const TEMP_URL_KEY_HEADER: HeaderName = HeaderName::from_static("x-account-meta-temp-url-key");

/// Reads and writes the temporary URL key of one Swift account over HTTP.
#[derive(Clone, Debug)]
pub struct SwiftAccountApi {
    client: Client,
    storage_url: Url,
    auth_token: HeaderValue,
}

impl SwiftAccountApi {
    /// Builds an API with its own HTTP client honoring `config.timeout()`.
    pub fn from_config(config: &SwiftAccountConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Self::with_client(config, client)
    }

    /// Builds an API on a caller-provided client; the caller owns its timeouts.
    pub fn with_client(config: &SwiftAccountConfig, client: Client) -> Result<Self, ConfigError> {
        let mut auth_token = HeaderValue::from_str(config.auth_token.expose_secret())
            .map_err(|_| ConfigError::InvalidAuthToken)?;
        auth_token.set_sensitive(true);

        Ok(Self {
            client,
            storage_url: config.storage_url.clone(),
            auth_token,
        })
    }

    pub fn storage_url(&self) -> &Url {
        &self.storage_url
    }
}

#[async_trait]
impl AccountKeyReader for SwiftAccountApi {
    async fn temporary_url_key(&self) -> Result<SecretString, AccountError> {
        debug!(storage_url = %self.storage_url, "reading temporary URL key");

        let response = self
            .client
            .head(self.storage_url.clone())
            .header(AUTH_TOKEN_HEADER, self.auth_token.clone())
            .send()
            .await
            .map_err(|e| AccountError::Connection(e.to_string()))?;
        check_status(response.status())?;

        let key = response
            .headers()
            .get(TEMP_URL_KEY_HEADER)
            .ok_or(AccountError::MissingKey)?
            .to_str()
            .map_err(|_| AccountError::InvalidKey)?;
        if key.is_empty() {
            return Err(AccountError::MissingKey);
        }

        Ok(SecretString::from(key.to_owned()))
    }
}

#[async_trait]
impl AccountKeyWriter for SwiftAccountApi {
    async fn set_temporary_url_key(&self, key: &SecretString) -> Result<(), AccountError> {
        let mut value =
            HeaderValue::from_str(key.expose_secret()).map_err(|_| AccountError::InvalidKey)?;
        value.set_sensitive(true);

        debug!(storage_url = %self.storage_url, "updating temporary URL key");

        let response = self
            .client
            .post(self.storage_url.clone())
            .header(AUTH_TOKEN_HEADER, self.auth_token.clone())
            .header(TEMP_URL_KEY_HEADER, value)
            .send()
            .await
            .map_err(|e| AccountError::Connection(e.to_string()))?;

        check_status(response.status())
    }
}

fn check_status(status: StatusCode) -> Result<(), AccountError> {
    if status.is_success() {
        return Ok(());
    }
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AccountError::Unauthorized {
            status: status.as_u16(),
        }),
        _ => Err(AccountError::Status {
            status: status.as_u16(),
        }),
    }
}
