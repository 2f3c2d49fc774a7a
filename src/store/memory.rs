use std::sync::RwLock;

use crate::{
    store::ports::CardStore,
    types::{CardKey, CardResponse},
};

#[derive(Debug, Default)]
pub struct InMemoryCardStore {
    response: RwLock<CardResponse>,
}

impl InMemoryCardStore {
    pub fn new(response: CardResponse) -> Self {
        Self {
            response: RwLock::new(response),
        }
    }

    pub fn replace(&self, response: CardResponse) {
        let mut guard = self
            .response
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = response;
    }

    pub fn len(&self) -> usize {
        self.get_cards().cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CardStore for InMemoryCardStore {
    fn get_cards(&self) -> CardResponse {
        self.response
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn remove_card(&self, key: CardKey) {
        let mut guard = self
            .response
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = guard.cards.len();
        guard.cards.retain(|card| {
            !(card.service_url == key.service_url
                && card.uuid.as_deref() == Some(key.card_uuid.as_str()))
        });

        tracing::debug!(
            target: "store",
            service_url = %key.service_url,
            card_uuid = %key.card_uuid,
            removed = before - guard.cards.len(),
            "card_removed"
        );
    }
}
