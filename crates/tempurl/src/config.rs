use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default time a fetched key is reused before it is read again.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Signer settings, deserializable from whatever configuration source the
/// embedding application uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerConfig {
    /// Seconds a fetched key is reused. `0` reads the key on every signature.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl SignerConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
