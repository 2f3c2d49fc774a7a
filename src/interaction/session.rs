use std::sync::Arc;

use crate::{
    feedback::FeedbackDispatcher,
    interaction::{
        callbacks::{AppLaunchHook, InteractionCallbacks},
        dismissal::{DismissalHandler, DismissalOutcome},
        suggestion::{SuggestionHandler, SuggestionOutcome},
    },
    links::{LaunchOutcome, LinkResolver},
    mode::InteractionContext,
    ordering::{OrderedCards, order_cards},
    store::CardStore,
    types::{Card, Link, OverrideReason, Suggestion},
    view::{RenderedCards, render_cards},
};

/// Facade over one card list: reads the store each pass, orders and renders
/// the cards, and routes user actions through the mode-gated handlers.
pub struct CardSession {
    context: InteractionContext,
    store: Arc<dyn CardStore>,
    resolver: LinkResolver,
    suggestions: SuggestionHandler,
    dismissals: DismissalHandler,
    on_app_launch: Option<AppLaunchHook>,
}

impl CardSession {
    pub fn new(
        context: InteractionContext,
        store: Arc<dyn CardStore>,
        dispatcher: FeedbackDispatcher,
        resolver: LinkResolver,
        callbacks: InteractionCallbacks,
    ) -> Self {
        Self {
            context,
            suggestions: SuggestionHandler::new(dispatcher.clone(), callbacks.take_suggestion),
            dismissals: DismissalHandler::new(dispatcher, Arc::clone(&store)),
            store,
            resolver,
            on_app_launch: callbacks.on_app_launch,
        }
    }

    pub fn context(&self) -> InteractionContext {
        self.context
    }

    pub fn ordered_cards(&self) -> OrderedCards {
        order_cards(self.store.get_cards().cards)
    }

    pub fn render(&self) -> RenderedCards {
        render_cards(&self.context, &self.resolver, &self.ordered_cards())
    }

    pub fn find_card(&self, card_uuid: &str) -> Option<Card> {
        self.store
            .get_cards()
            .cards
            .into_iter()
            .find(|card| card.uuid.as_deref() == Some(card_uuid))
    }

    pub fn take_suggestion(&self, card: &Card, suggestion: &Suggestion) -> SuggestionOutcome {
        self.suggestions.handle(&self.context, card, suggestion)
    }

    pub fn dismiss(&self, card: &Card, reason: Option<&OverrideReason>) -> DismissalOutcome {
        self.dismissals.handle(&self.context, card, reason)
    }

    pub fn click_link(&self, link: &Link) -> LaunchOutcome {
        let outcome = self.resolver.launch(&self.context, link);
        if let Some(on_app_launch) = &self.on_app_launch {
            on_app_launch(link, &outcome);
        }
        outcome
    }
}
