use cds_cards::{
    feedback::FeedbackErrorKind,
    links::{BLOCKED_LINK_NOTICE, LaunchOutcome},
    mode::Mode,
    types::{Link, LinkType, Severity},
    view::RenderedCards,
};

use crate::{Harness, card, full_card, override_reason, smart_link, suggestion};

#[tokio::test]
async fn given_demonstration_mode_when_every_action_is_tried_then_no_side_effect_happens() {
    let anonymous = card(None, Severity::Info, "No identity");
    let mut harness = Harness::demonstration(vec![full_card("c1"), anonymous.clone()]);
    let full = harness.session.find_card("c1").expect("card c1");
    let reasons = [
        None,
        Some(override_reason("X", Some("http://example.org/reasons"), "Not relevant")),
        Some(override_reason("", None, "")),
    ];

    for target in [&full, &anonymous] {
        for reason in &reasons {
            assert!(!harness.session.dismiss(target, reason.as_ref()).is_dismissed());
        }
        for candidate in [
            suggestion(Some("Order"), Some("s1")),
            suggestion(None, Some("s1")),
            suggestion(Some("Order"), None),
        ] {
            assert!(!harness.session.take_suggestion(target, &candidate).is_accepted());
        }
    }
    for link in &full.links {
        assert_eq!(harness.session.click_link(link), LaunchOutcome::Suppressed);
    }

    tokio::task::yield_now().await;
    assert!(harness.drain_deliveries().is_empty());
    assert!(harness.store.removed().is_empty());
    assert!(harness.taken().is_empty());
    assert!(harness.opened().is_empty());
    assert_eq!(harness.session.ordered_cards().cards().len(), 2);
}

#[tokio::test]
async fn given_demonstration_mode_when_rendered_then_full_structure_is_still_produced() {
    let harness = Harness::demonstration(vec![full_card("c1")]);
    assert_eq!(harness.session.context().mode, Mode::Demonstration);

    let RenderedCards::Cards(views) = harness.session.render() else {
        panic!("one card should render");
    };
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].suggestions.len(), 1);
    assert_eq!(views[0].links.len(), 1);
    assert!(views[0].dismiss.is_some());
}

#[tokio::test]
async fn given_empty_store_when_rendered_then_no_cards_is_reported() {
    let harness = Harness::live(Vec::new());
    assert_eq!(harness.session.render(), RenderedCards::NoCards);
    assert!(harness.session.ordered_cards().is_empty());
}

#[tokio::test]
async fn given_mixed_severities_when_ordered_then_store_cards_come_back_by_rank() {
    let harness = Harness::live(vec![
        card(Some("a"), Severity::Info, "A"),
        card(Some("b"), Severity::Critical, "B"),
        card(Some("c"), Severity::Warning, "C"),
    ]);

    let order: Vec<_> = harness
        .session
        .ordered_cards()
        .cards()
        .iter()
        .map(|card| card.summary.clone())
        .collect();
    assert_eq!(order, ["B", "C", "A"]);
}

#[tokio::test]
async fn given_dismissed_card_when_rendered_again_then_it_is_gone() {
    let harness = Harness::live(vec![full_card("c1"), full_card("c2")]);
    let first = harness.session.find_card("c1").expect("card c1");

    harness.session.dismiss(&first, None);

    let rendered = harness.session.render();
    let uuids: Vec<_> = rendered
        .views()
        .iter()
        .map(|view| view.uuid.clone())
        .collect();
    assert_eq!(uuids, [Some("c2".to_string())]);
}

#[tokio::test]
async fn given_smart_link_when_clicked_in_live_mode_then_it_opens_and_notifies() {
    let harness = Harness::live(vec![full_card("c1")]);
    let card = harness.session.find_card("c1").expect("card c1");

    let outcome = harness.session.click_link(&card.links[0]);

    let expected = "https://app.example/launch?iss=https%3A%2F%2Flaunch.smarthealthit.org%2Fv%2Fr4%2Ffhir&launch=abc";
    assert_eq!(outcome.launched_url(), Some(expected));
    assert_eq!(harness.opened(), vec![expected.to_string()]);
    assert_eq!(harness.launches(), 1);
}

#[tokio::test]
async fn given_any_link_click_then_app_launch_callback_fires_once() {
    let live = Harness::live(vec![full_card("c1")]);
    let absolute = Link {
        label: "Guideline".to_string(),
        url: Some("https://guidelines.example/doc".to_string()),
        link_type: LinkType::Absolute,
        error: false,
    };
    let broken = Link {
        error: true,
        ..smart_link("Broken", "https://app.example/launch")
    };

    assert_eq!(live.session.click_link(&absolute), LaunchOutcome::Unresolved);
    assert_eq!(
        live.session.click_link(&broken),
        LaunchOutcome::Blocked {
            notice: BLOCKED_LINK_NOTICE,
        }
    );
    assert_eq!(live.launches(), 2);
    assert!(live.opened().is_empty());

    let demo = Harness::demonstration(vec![full_card("c1")]);
    demo.session
        .click_link(&smart_link("App", "https://app.example/launch"));
    assert_eq!(demo.launches(), 1);
    assert!(demo.opened().is_empty());
}

#[tokio::test]
async fn find_card_only_matches_on_uuid() {
    let harness = Harness::live(vec![full_card("c1"), card(None, Severity::Info, "c2")]);
    assert!(harness.session.find_card("c1").is_some());
    assert!(harness.session.find_card("c2").is_none());
}

#[test]
fn given_no_async_runtime_when_actions_are_taken_then_they_complete_without_feedback() {
    let harness = Harness::live(vec![full_card("c1"), full_card("c2")]);
    let first = harness.session.find_card("c1").expect("card c1");

    let taken = harness
        .session
        .take_suggestion(&first, &first.suggestions[0]);
    assert!(taken.is_accepted());
    assert_eq!(harness.taken(), vec![Some("Order".to_string())]);
    let accepted_feedback = taken
        .into_feedback()
        .expect("a feedback handle is still returned");
    assert!(accepted_feedback.is_finished());

    let dismissed = harness.session.dismiss(&first, None);
    assert!(dismissed.is_dismissed());
    assert_eq!(harness.store.removed().len(), 1);
    assert!(harness.session.find_card("c1").is_none());
    assert!(harness.session.find_card("c2").is_some());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build");
    for handle in [Some(accepted_feedback), dismissed.into_feedback()]
        .into_iter()
        .flatten()
    {
        let err = runtime
            .block_on(handle.outcome())
            .expect_err("undelivered feedback should report an error");
        assert_eq!(err.kind, FeedbackErrorKind::Internal);
    }
}
