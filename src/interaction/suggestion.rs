use crate::{
    feedback::{DispatchHandle, FeedbackDispatcher, compose_accepted},
    interaction::callbacks::TakeSuggestionHook,
    mode::InteractionContext,
    types::{Card, Suggestion},
};

#[derive(Debug)]
pub enum SuggestionOutcome {
    /// Demonstration mode: nothing ran.
    Suppressed,
    /// No label: diagnostic only, no feedback, no callback.
    MissingLabel,
    /// The callback fired. `feedback` is `None` when the suggestion or its
    /// card has no uuid to report against.
    Accepted { feedback: Option<DispatchHandle> },
}

impl SuggestionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SuggestionOutcome::Accepted { .. })
    }

    pub fn into_feedback(self) -> Option<DispatchHandle> {
        match self {
            SuggestionOutcome::Accepted { feedback } => feedback,
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct SuggestionHandler {
    dispatcher: FeedbackDispatcher,
    take_suggestion: TakeSuggestionHook,
}

impl SuggestionHandler {
    pub fn new(dispatcher: FeedbackDispatcher, take_suggestion: TakeSuggestionHook) -> Self {
        Self {
            dispatcher,
            take_suggestion,
        }
    }

    pub fn handle(
        &self,
        context: &InteractionContext,
        card: &Card,
        suggestion: &Suggestion,
    ) -> SuggestionOutcome {
        context
            .admit("take_suggestion", || self.handle_live(card, suggestion))
            .unwrap_or(SuggestionOutcome::Suppressed)
    }

    fn handle_live(&self, card: &Card, suggestion: &Suggestion) -> SuggestionOutcome {
        if !suggestion.is_actionable() {
            tracing::warn!(
                target: "interaction",
                card_uuid = ?card.uuid,
                suggestion_uuid = ?suggestion.uuid,
                "suggestion_missing_label"
            );
            return SuggestionOutcome::MissingLabel;
        }

        let feedback = match compose_accepted(suggestion, card.uuid.as_deref()) {
            Some(record) => Some(self.dispatcher.dispatch(&card.service_url, record)),
            None => {
                tracing::debug!(
                    target: "interaction",
                    card_uuid = ?card.uuid,
                    suggestion_uuid = ?suggestion.uuid,
                    "suggestion_feedback_skipped"
                );
                None
            }
        };

        (self.take_suggestion)(suggestion);
        SuggestionOutcome::Accepted { feedback }
    }
}
