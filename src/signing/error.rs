use thiserror::Error;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("missing signing secret environment variable {var}")]
    MissingSecret { var: String },
    #[error("signing secret cannot be empty")]
    EmptySecret,
    #[error("signing key rejected: {0}")]
    InvalidKey(String),
    #[error("failed to encode token segment: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("token signing is disabled in this process")]
    Disabled,
}
