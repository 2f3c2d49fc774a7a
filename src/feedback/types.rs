use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::CardUuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackOutcome {
    Accepted,
    Overridden,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedSuggestion {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideReasonCode {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideReasonRecord {
    pub reason: OverrideReasonCode,
}

/// One feedback entry as posted to `{serviceUrl}/feedback`.
///
/// `accepted` records carry exactly one accepted suggestion and no override
/// reason; `overridden` records never carry accepted suggestions. Build them
/// through [`crate::feedback::composer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub card: CardUuid,
    pub outcome: FeedbackOutcome,
    #[serde(with = "time::serde::rfc3339")]
    pub outcome_timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_suggestions: Option<Vec<AcceptedSuggestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_reason: Option<OverrideReasonRecord>,
}

/// Request body: the record wrapped in a single-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEnvelope {
    pub feedback: Vec<FeedbackRecord>,
}

impl From<FeedbackRecord> for FeedbackEnvelope {
    fn from(record: FeedbackRecord) -> Self {
        Self {
            feedback: vec![record],
        }
    }
}
