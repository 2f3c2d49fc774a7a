use time::OffsetDateTime;

use crate::{
    feedback::types::{
        AcceptedSuggestion, FeedbackOutcome, FeedbackRecord, OverrideReasonCode,
        OverrideReasonRecord,
    },
    types::{OverrideReason, Suggestion},
};

/// Returns `None` when either the suggestion or the card has no uuid; the
/// caller treats that as "nothing to send", not as a failure.
pub fn compose_accepted(suggestion: &Suggestion, card_uuid: Option<&str>) -> Option<FeedbackRecord> {
    compose_accepted_at(suggestion, card_uuid, OffsetDateTime::now_utc())
}

pub fn compose_overridden(card_uuid: &str, reason: Option<&OverrideReason>) -> FeedbackRecord {
    compose_overridden_at(card_uuid, reason, OffsetDateTime::now_utc())
}

fn compose_accepted_at(
    suggestion: &Suggestion,
    card_uuid: Option<&str>,
    now: OffsetDateTime,
) -> Option<FeedbackRecord> {
    let suggestion_uuid = non_empty(suggestion.uuid.as_deref())?;
    let card_uuid = non_empty(card_uuid)?;

    Some(FeedbackRecord {
        card: card_uuid.to_string(),
        outcome: FeedbackOutcome::Accepted,
        outcome_timestamp: now,
        accepted_suggestions: Some(vec![AcceptedSuggestion {
            id: suggestion_uuid.to_string(),
        }]),
        override_reason: None,
    })
}

fn compose_overridden_at(
    card_uuid: &str,
    reason: Option<&OverrideReason>,
    now: OffsetDateTime,
) -> FeedbackRecord {
    // `system` only means something next to a `code`.
    let override_reason = reason
        .filter(|reason| !reason.code.is_empty())
        .map(|reason| OverrideReasonRecord {
            reason: OverrideReasonCode {
                code: reason.code.clone(),
                system: non_empty(reason.system.as_deref()).map(str::to_string),
            },
        });

    FeedbackRecord {
        card: card_uuid.to_string(),
        outcome: FeedbackOutcome::Overridden,
        outcome_timestamp: now,
        accepted_suggestions: None,
        override_reason,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
