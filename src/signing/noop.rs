use crate::signing::{error::SigningError, ports::TokenSigner};

/// Signer for runs that never transmit feedback: demonstration mode, or a
/// command that only renders or launches.
#[derive(Debug, Clone, Default)]
pub struct DisabledTokenSigner;

impl TokenSigner for DisabledTokenSigner {
    fn sign(&self, _audience: &str) -> Result<String, SigningError> {
        Err(SigningError::Disabled)
    }
}
