//! HTTP account collaborator for [`swift_tempurl`].
//!
//! [`SwiftAccountApi`] reads and writes the `X-Account-Meta-Temp-Url-Key`
//! metadata of one already-resolved Swift account URL.

mod api;
mod config;
mod error;

pub use api::{SwiftAccountApi, AUTH_TOKEN_HEADER, TEMP_URL_KEY_HEADER};
pub use config::SwiftAccountConfig;
pub use error::ConfigError;
