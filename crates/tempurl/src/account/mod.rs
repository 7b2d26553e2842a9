mod memory;

pub use memory::InMemoryAccount;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::AccountError;

/// Read access to one account's temporary URL key.
///
/// Implementations are bound to a single account in a single region. Any
/// timeout policy belongs to the implementation; callers only see the
/// resulting [`AccountError`].
#[async_trait]
pub trait AccountKeyReader: Send + Sync {
    /// Reads the key the storage service currently holds for the account.
    async fn temporary_url_key(&self) -> Result<SecretString, AccountError>;
}

/// Write access to one account's temporary URL key.
///
/// Used by provisioning and administration, never by the signer itself.
#[async_trait]
pub trait AccountKeyWriter: Send + Sync {
    /// Replaces the account's key. URLs signed with the previous key stop
    /// verifying as soon as the service applies the change.
    async fn set_temporary_url_key(&self, key: &SecretString) -> Result<(), AccountError>;
}
