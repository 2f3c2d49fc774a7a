use crate::signing::error::SigningError;

/// Issues a bearer token addressed to `audience` (the full feedback endpoint).
pub trait TokenSigner: Send + Sync {
    fn sign(&self, audience: &str) -> Result<String, SigningError>;
}
