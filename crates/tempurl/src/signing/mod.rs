mod digest;
mod signer;
mod temp_url;

pub use digest::{canonical_message, compute_signature};
pub use signer::TemporaryUrlSigner;
pub use temp_url::{TEMP_URL_EXPIRES, TEMP_URL_SIG};
