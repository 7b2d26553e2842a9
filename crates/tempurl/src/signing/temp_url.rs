use std::time::Duration;

use chrono::Utc;
use url::Url;

use super::signer::TemporaryUrlSigner;
use crate::error::{Result, TempUrlError};

/// Query parameter carrying the signature.
pub const TEMP_URL_SIG: &str = "temp_url_sig";
/// Query parameter carrying the expiry in unix seconds.
pub const TEMP_URL_EXPIRES: &str = "temp_url_expires";

impl TemporaryUrlSigner {
    /// Signs `object_url` and returns it with the signature and expiry
    /// appended as query parameters.
    ///
    /// The signed path is `object_url.path()`, percent-encoding included,
    /// which is what the service sees on the request line.
    pub async fn sign_url(&self, method: &str, object_url: &Url, expires: i64) -> Result<Url> {
        let signature = self.sign(method, object_url.path(), expires).await?;

        let mut signed = object_url.clone();
        signed
            .query_pairs_mut()
            .append_pair(TEMP_URL_SIG, &signature)
            .append_pair(TEMP_URL_EXPIRES, &expires.to_string());
        Ok(signed)
    }

    /// Like [`sign_url`](Self::sign_url) with the expiry set `ttl` from now.
    pub async fn sign_url_for(&self, method: &str, object_url: &Url, ttl: Duration) -> Result<Url> {
        let ttl = i64::try_from(ttl.as_secs())
            .map_err(|_| TempUrlError::invalid_argument(format!("ttl {ttl:?} is too large")))?;
        let expires = Utc::now()
            .timestamp()
            .checked_add(ttl)
            .ok_or_else(|| TempUrlError::invalid_argument("expiry overflows i64"))?;

        self.sign_url(method, object_url, expires).await
    }
}
