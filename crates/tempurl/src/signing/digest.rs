use hmac::{Hmac, Mac};
use sha1::Sha1;

// Swift's TempURL middleware verifies HMAC-SHA1; another digest never verifies.
type HmacSha1 = Hmac<Sha1>;

/// Builds the newline-joined message the storage service reconstructs when
/// verifying a temporary URL.
pub fn canonical_message(method: &str, expires: i64, path: &str) -> String {
    format!("{method}\n{expires}\n{path}")
}

/// Lowercase hex HMAC-SHA1 of `message` keyed with `key`.
pub fn compute_signature(key: &[u8], message: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
