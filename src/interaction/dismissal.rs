use std::sync::Arc;

use crate::{
    feedback::{DispatchHandle, FeedbackDispatcher, compose_overridden},
    mode::InteractionContext,
    store::CardStore,
    types::{Card, CardKey, OverrideReason},
};

#[derive(Debug)]
pub enum DismissalOutcome {
    Suppressed,
    /// A card without uuid can neither be reported on nor addressed in the store.
    MissingCardUuid,
    Dismissed {
        key: CardKey,
        feedback: DispatchHandle,
    },
}

impl DismissalOutcome {
    pub fn is_dismissed(&self) -> bool {
        matches!(self, DismissalOutcome::Dismissed { .. })
    }

    pub fn into_feedback(self) -> Option<DispatchHandle> {
        match self {
            DismissalOutcome::Dismissed { feedback, .. } => Some(feedback),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct DismissalHandler {
    dispatcher: FeedbackDispatcher,
    store: Arc<dyn CardStore>,
}

impl DismissalHandler {
    pub fn new(dispatcher: FeedbackDispatcher, store: Arc<dyn CardStore>) -> Self {
        Self { dispatcher, store }
    }

    pub fn handle(
        &self,
        context: &InteractionContext,
        card: &Card,
        reason: Option<&OverrideReason>,
    ) -> DismissalOutcome {
        context
            .admit("dismiss_card", || self.handle_live(card, reason))
            .unwrap_or(DismissalOutcome::Suppressed)
    }

    fn handle_live(&self, card: &Card, reason: Option<&OverrideReason>) -> DismissalOutcome {
        let Some(key) = card.key() else {
            tracing::warn!(
                target: "interaction",
                service_url = %card.service_url,
                summary = %card.summary,
                "dismissal_without_card_uuid"
            );
            return DismissalOutcome::MissingCardUuid;
        };

        let record = compose_overridden(&key.card_uuid, reason);
        let feedback = self.dispatcher.dispatch(&key.service_url, record);

        // Removal does not wait on, or depend on, the feedback delivery.
        self.store.remove_card(key.clone());
        tracing::info!(
            target: "interaction",
            service_url = %key.service_url,
            card_uuid = %key.card_uuid,
            override_code = reason.map(|reason| reason.code.as_str()).unwrap_or("-"),
            "card_dismissed"
        );

        DismissalOutcome::Dismissed { key, feedback }
    }
}
