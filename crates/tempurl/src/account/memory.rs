use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;

use super::{AccountKeyReader, AccountKeyWriter};
use crate::error::AccountError;

/// Account held entirely in memory.
///
/// Counts reads and can be switched into an unavailable state or given an
/// artificial read latency, which makes it a stand-in for the storage service
/// in tests and local tooling.
#[derive(Debug, Default)]
pub struct InMemoryAccount {
    key: Mutex<Option<SecretString>>,
    reads: AtomicUsize,
    unavailable: AtomicBool,
    latency: Option<Duration>,
}

impl InMemoryAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: Mutex::new(Some(SecretString::from(key.to_owned()))),
            ..Self::default()
        }
    }

    /// Delays every read by `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes subsequent reads and writes fail with [`AccountError::Connection`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of key reads served or attempted so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<(), AccountError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AccountError::Connection("account service unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountKeyReader for InMemoryAccount {
    async fn temporary_url_key(&self) -> Result<SecretString, AccountError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.ensure_available()?;

        self.key.lock().await.clone().ok_or(AccountError::MissingKey)
    }
}

#[async_trait]
impl AccountKeyWriter for InMemoryAccount {
    async fn set_temporary_url_key(&self, key: &SecretString) -> Result<(), AccountError> {
        self.ensure_available()?;
        *self.key.lock().await = Some(SecretString::from(key.expose_secret().to_owned()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_account_reports_missing_key() {
        let account = InMemoryAccount::new();
        let err = account.temporary_url_key().await.unwrap_err();
        assert!(matches!(err, AccountError::MissingKey));
        assert_eq!(account.reads(), 1);
    }

    #[tokio::test]
    async fn write_replaces_key() {
        let account = InMemoryAccount::with_key("old");
        account
            .set_temporary_url_key(&SecretString::from("new".to_owned()))
            .await
            .unwrap();
        let key = account.temporary_url_key().await.unwrap();
        assert_eq!(key.expose_secret(), "new");
    }

    #[tokio::test]
    async fn unavailable_account_fails_reads_and_writes() {
        let account = InMemoryAccount::with_key("mykey");
        account.set_unavailable(true);

        assert!(matches!(
            account.temporary_url_key().await,
            Err(AccountError::Connection(_))
        ));
        assert!(matches!(
            account
                .set_temporary_url_key(&SecretString::from("other".to_owned()))
                .await,
            Err(AccountError::Connection(_))
        ));

        account.set_unavailable(false);
        let key = account.temporary_url_key().await.unwrap();
        assert_eq!(key.expose_secret(), "mykey");
    }
}
