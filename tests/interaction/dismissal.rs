use cds_cards::{
    feedback::{FeedbackErrorKind, FeedbackOutcome},
    interaction::DismissalOutcome,
    types::{CardKey, Severity},
};

use crate::{Harness, SERVICE_URL, card, full_card, override_reason};

fn key(card_uuid: &str) -> CardKey {
    CardKey {
        service_url: SERVICE_URL.to_string(),
        card_uuid: card_uuid.to_string(),
    }
}

#[tokio::test]
async fn given_reason_when_dismissed_then_overridden_feedback_carries_code_and_system() {
    let mut harness = Harness::live(vec![full_card("c1")]);
    let card = harness.session.find_card("c1").expect("card c1");
    let reason = card.override_reasons[0].clone();

    let outcome = harness.session.dismiss(&card, Some(&reason));
    assert!(outcome.is_dismissed());
    outcome
        .into_feedback()
        .expect("feedback should be dispatched")
        .outcome()
        .await
        .expect("delivery should succeed");

    let deliveries = harness.drain_deliveries();
    assert_eq!(deliveries.len(), 1);
    let record = &deliveries[0].envelope.feedback[0];
    assert_eq!(record.card, "c1");
    assert_eq!(record.outcome, FeedbackOutcome::Overridden);
    assert!(record.accepted_suggestions.is_none());
    let code = &record
        .override_reason
        .as_ref()
        .expect("override reason")
        .reason;
    assert_eq!(code.code, "X");
    assert_eq!(code.system.as_deref(), Some("http://example.org/reasons"));

    assert_eq!(harness.store.removed(), vec![key("c1")]);
    assert!(harness.session.find_card("c1").is_none());
}

#[tokio::test]
async fn given_no_reason_when_dismissed_then_feedback_has_no_override_reason() {
    let mut harness = Harness::live(vec![full_card("c1")]);
    let card = harness.session.find_card("c1").expect("card c1");

    let handle = harness
        .session
        .dismiss(&card, None)
        .into_feedback()
        .expect("feedback should be dispatched");
    handle.outcome().await.expect("delivery should succeed");

    let deliveries = harness.drain_deliveries();
    assert!(deliveries[0].envelope.feedback[0].override_reason.is_none());
    assert_eq!(harness.store.removed(), vec![key("c1")]);
}

#[tokio::test]
async fn given_reason_with_empty_code_when_dismissed_then_override_reason_is_omitted() {
    let mut harness = Harness::live(vec![full_card("c1")]);
    let card = harness.session.find_card("c1").expect("card c1");
    let blank = override_reason("", Some("http://example.org/reasons"), "Blank");

    harness
        .session
        .dismiss(&card, Some(&blank))
        .into_feedback()
        .expect("feedback should be dispatched")
        .outcome()
        .await
        .expect("delivery should succeed");

    let deliveries = harness.drain_deliveries();
    assert!(deliveries[0].envelope.feedback[0].override_reason.is_none());
}

#[tokio::test]
async fn given_failing_transport_when_dismissed_then_card_is_still_removed() {
    let mut harness = Harness::live_with_failing_transport(vec![full_card("c1"), full_card("c2")]);
    let card = harness.session.find_card("c1").expect("card c1");

    let DismissalOutcome::Dismissed { key: removed, feedback } = harness.session.dismiss(&card, None)
    else {
        panic!("card with uuid should be dismissed");
    };
    assert_eq!(removed, key("c1"));
    assert_eq!(harness.store.removed(), vec![key("c1")]);

    let err = feedback.outcome().await.expect_err("transport should fail");
    assert_eq!(err.kind, FeedbackErrorKind::Transport);
    assert_eq!(harness.drain_deliveries().len(), 1);
    assert!(harness.session.find_card("c2").is_some());
}

#[tokio::test]
async fn given_card_without_uuid_when_dismissed_then_nothing_is_sent_or_removed() {
    let anonymous = card(None, Severity::Critical, "No identity");
    let mut harness = Harness::live(vec![anonymous.clone()]);

    let outcome = harness.session.dismiss(&anonymous, None);

    assert!(matches!(outcome, DismissalOutcome::MissingCardUuid));
    assert!(harness.store.removed().is_empty());
    assert!(harness.drain_deliveries().is_empty());
    assert_eq!(harness.session.ordered_cards().cards().len(), 1);
}
