use async_trait::async_trait;

use crate::feedback::{error::FeedbackError, types::FeedbackEnvelope};

/// A signed, addressed feedback request ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDelivery {
    pub endpoint: String,
    pub bearer_token: String,
    pub envelope: FeedbackEnvelope,
}

#[async_trait]
pub trait FeedbackTransport: Send + Sync {
    async fn deliver(&self, delivery: FeedbackDelivery) -> Result<(), FeedbackError>;
}
