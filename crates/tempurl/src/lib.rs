//! Signing of OpenStack Swift temporary URLs.
//!
//! A [`TemporaryUrlSigner`] reads the account's temporary URL key through an
//! [`AccountKeyReader`], keeps it in a [`KeyCache`] for a bounded interval and
//! signs `(method, path, expires)` with HMAC-SHA1 the way Swift's TempURL
//! middleware verifies it.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use swift_tempurl::{InMemoryAccount, TemporaryUrlSigner};
//!
//! # async fn example() -> swift_tempurl::Result<()> {
//! let account = Arc::new(InMemoryAccount::with_key("mykey"));
//! let signer = TemporaryUrlSigner::check_api_every(account, Duration::from_secs(60));
//!
//! let signature = signer
//!     .sign("GET", "/v1/AUTH_test/container/object", 1_400_000_000)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod cache;
pub mod config;
pub mod error;
pub mod signing;

pub use account::{AccountKeyReader, AccountKeyWriter, InMemoryAccount};
pub use cache::KeyCache;
pub use config::SignerConfig;
pub use error::{AccountError, Result, TempUrlError};
pub use signing::{TEMP_URL_EXPIRES, TEMP_URL_SIG, TemporaryUrlSigner, canonical_message, compute_signature};
