//! Time-bounded cache for an account's temporary URL key.
//!
//! The cache is either empty or holds one key together with the instant it
//! was fetched. A call to [`KeyCache::current_key`] reuses the key until
//! `refresh_interval` has elapsed since that instant and reads a fresh one
//! from the account afterwards.
//!
//! The staleness check, the read and the store all happen under one async
//! mutex, so concurrent callers never issue more than one read at a time and
//! a slow read cannot overwrite a newer entry.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::account::AccountKeyReader;
use crate::error::Result;

struct CacheEntry {
    key: SecretString,
    fetched_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, refresh_interval: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.fetched_at) < refresh_interval
    }
}

/// Caches one account's temporary URL key for at most `refresh_interval`.
///
/// A cache belongs to exactly one account in one region and is never shared
/// with a signer for another account.
pub struct KeyCache {
    reader: Arc<dyn AccountKeyReader>,
    refresh_interval: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl KeyCache {
    /// A zero `refresh_interval` reads the key on every call.
    pub fn new(reader: Arc<dyn AccountKeyReader>, refresh_interval: Duration) -> Self {
        Self {
            reader,
            refresh_interval,
            entry: Mutex::new(None),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Returns the cached key, reading a new one from the account when the
    /// cache is empty or the entry is at least `refresh_interval` old.
    ///
    /// A failed read leaves any previous entry in place but does not return
    /// it: the error is surfaced so no URL is signed with a key that may have
    /// been revoked.
    pub async fn current_key(&self) -> Result<SecretString> {
        let mut entry = self.entry.lock().await;

        let now = Instant::now();
        if let Some(cached) = entry.as_ref() {
            if cached.is_fresh(self.refresh_interval, now) {
                return Ok(cached.key.clone());
            }
        }

        let key = match self.reader.temporary_url_key().await {
            Ok(key) => key,
            Err(err) => {
                warn!(error = %err, "failed to refresh temporary URL key");
                return Err(err.into());
            }
        };

        debug!(
            refresh_interval_secs = self.refresh_interval.as_secs(),
            "refreshed temporary URL key"
        );
        *entry = Some(CacheEntry {
            key: key.clone(),
            fetched_at: Instant::now(),
        });

        Ok(key)
    }

    /// Drops the cached key so the next call reads it again.
    pub async fn invalidate(&self) {
        self.entry.lock().await.take();
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;
    use crate::account::{AccountKeyWriter, InMemoryAccount};
    use crate::error::{AccountError, TempUrlError};

    fn cache_for(account: &Arc<InMemoryAccount>, secs: u64) -> KeyCache {
        KeyCache::new(account.clone(), Duration::from_secs(secs))
    }

    #[tokio::test(start_paused = true)]
    async fn first_call_reads_key() {
        let account = Arc::new(InMemoryAccount::with_key("mykey"));
        let cache = cache_for(&account, 5);

        let key = cache.current_key().await.unwrap();
        assert_eq!(key.expose_secret(), "mykey");
        assert_eq!(account.reads(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reuses_key_within_interval() {
        let account = Arc::new(InMemoryAccount::with_key("mykey"));
        let cache = cache_for(&account, 5);

        cache.current_key().await.unwrap();
        tokio::time::advance(Duration::from_millis(4_999)).await;
        cache.current_key().await.unwrap();

        assert_eq!(account.reads(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn refreshes_at_interval_boundary() {
        let account = Arc::new(InMemoryAccount::with_key("mykey"));
        let cache = cache_for(&account, 5);

        cache.current_key().await.unwrap();
        tokio::time::advance(Duration::from_secs(5)).await;
        cache.current_key().await.unwrap();

        assert_eq!(account.reads(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_always_reads() {
        let account = Arc::new(InMemoryAccount::with_key("mykey"));
        let cache = cache_for(&account, 0);

        for _ in 0..3 {
            cache.current_key().await.unwrap();
        }

        assert_eq!(account.reads(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn rotated_key_visible_after_interval() {
        let account = Arc::new(InMemoryAccount::with_key("old"));
        let cache = cache_for(&account, 60);

        cache.current_key().await.unwrap();
        account
            .set_temporary_url_key(&SecretString::from("new".to_owned()))
            .await
            .unwrap();

        let stale = cache.current_key().await.unwrap();
        assert_eq!(stale.expose_secret(), "old");

        tokio::time::advance(Duration::from_secs(60)).await;
        let fresh = cache.current_key().await.unwrap();
        assert_eq!(fresh.expose_secret(), "new");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_does_not_fall_back() {
        let account = Arc::new(InMemoryAccount::with_key("mykey"));
        let cache = cache_for(&account, 5);

        cache.current_key().await.unwrap();
        tokio::time::advance(Duration::from_secs(6)).await;
        account.set_unavailable(true);

        let err = cache.current_key().await.unwrap_err();
        assert!(matches!(
            err,
            TempUrlError::UpstreamUnavailable(AccountError::Connection(_))
        ));

        // the failure is not cached: the next call reads again
        account.set_unavailable(false);
        let key = cache.current_key().await.unwrap();
        assert_eq!(key.expose_secret(), "mykey");
        assert_eq!(account.reads(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_first_read_leaves_cache_empty() {
        let account = Arc::new(InMemoryAccount::new());
        let cache = cache_for(&account, 5);

        assert!(cache.current_key().await.is_err());
        account
            .set_temporary_url_key(&SecretString::from("mykey".to_owned()))
            .await
            .unwrap();

        let key = cache.current_key().await.unwrap();
        assert_eq!(key.expose_secret(), "mykey");
        assert_eq!(account.reads(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn invalidate_forces_read() {
        let account = Arc::new(InMemoryAccount::with_key("mykey"));
        let cache = cache_for(&account, 300);

        cache.current_key().await.unwrap();
        cache.invalidate().await;
        cache.current_key().await.unwrap();

        assert_eq!(account.reads(), 2);
    }
}
