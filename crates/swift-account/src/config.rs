use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach one Swift account.
///
/// `storage_url` is the account URL returned by authentication, e.g.
/// `https://swift.example.com/v1/AUTH_test`, already resolved for the
/// desired region.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiftAccountConfig {
    pub storage_url: Url,
    pub auth_token: SecretString,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl SwiftAccountConfig {
    pub fn new(storage_url: Url, auth_token: SecretString) -> Self {
        Self {
            storage_url,
            auth_token,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
