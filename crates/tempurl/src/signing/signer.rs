use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;

use super::digest::{canonical_message, compute_signature};
use crate::account::AccountKeyReader;
use crate::cache::KeyCache;
use crate::config::SignerConfig;
use crate::error::{Result, TempUrlError};

/// Signs temporary URLs for one storage account.
///
/// A signer owns the [`KeyCache`] for its account and is meant to live as
/// long as the process keeps issuing URLs for that account; share it as
/// `Arc<TemporaryUrlSigner>` between tasks. Building a signer per request
/// works, but then every signature costs a key read.
pub struct TemporaryUrlSigner {
    keys: KeyCache,
}

impl TemporaryUrlSigner {
    pub fn new(keys: KeyCache) -> Self {
        Self { keys }
    }

    /// Builds a signer that re-reads the account key at most every
    /// `refresh_interval`.
    pub fn check_api_every(reader: Arc<dyn AccountKeyReader>, refresh_interval: Duration) -> Self {
        Self::new(KeyCache::new(reader, refresh_interval))
    }

    pub fn from_config(reader: Arc<dyn AccountKeyReader>, config: &SignerConfig) -> Self {
        Self::check_api_every(reader, config.refresh_interval())
    }

    pub fn key_cache(&self) -> &KeyCache {
        &self.keys
    }

    /// Signs `method` on `path` until `expires` (unix seconds).
    ///
    /// `method` is used exactly as given and `path` must be the object path as
    /// it appears in the resource URI, without host or query string. An
    /// `expires` in the past is signed as requested.
    pub async fn sign(&self, method: &str, path: &str, expires: i64) -> Result<String> {
        if path.is_empty() {
            return Err(TempUrlError::invalid_argument("path must not be empty"));
        }
        if expires < 0 {
            return Err(TempUrlError::invalid_argument(format!(
                "expires must not be negative, got {expires}"
            )));
        }

        let key = self.keys.current_key().await?;
        let message = canonical_message(method, expires, path);

        Ok(compute_signature(key.expose_secret().as_bytes(), &message))
    }
}
