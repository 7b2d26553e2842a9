/// Failure reported by an account collaborator while reading or writing the
/// temporary URL key.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Failed to reach account service: {0}")]
    Connection(String),
    #[error("Account service rejected credentials (status {status})")]
    Unauthorized { status: u16 },
    #[error("Account service returned unexpected status {status}")]
    Status { status: u16 },
    #[error("Account has no temporary URL key")]
    MissingKey,
    #[error("Temporary URL key cannot be sent as a header value")]
    InvalidKey,
}

#[derive(Debug, thiserror::Error)]
pub enum TempUrlError {
    #[error("Temporary URL key unavailable: {0}")]
    UpstreamUnavailable(#[from] AccountError),
    #[error("Invalid signing request: {0}")]
    InvalidArgument(String),
}

impl TempUrlError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether retrying the same call later may succeed.
    ///
    /// Key refresh failures depend on the account service and may clear up;
    /// a malformed request never will.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TempUrlError::UpstreamUnavailable(_))
    }
}

pub type Result<T, E = TempUrlError> = std::result::Result<T, E>;
