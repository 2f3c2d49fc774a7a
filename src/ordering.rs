use serde::Serialize;

use crate::types::Card;

/// Result of ordering a card collection. An empty input is reported as
/// `NoCards` so it cannot be mistaken for a pending response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "cards", rename_all = "snake_case")]
pub enum OrderedCards {
    NoCards,
    Cards(Vec<Card>),
}

impl OrderedCards {
    pub fn is_empty(&self) -> bool {
        matches!(self, OrderedCards::NoCards)
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            OrderedCards::NoCards => &[],
            OrderedCards::Cards(cards) => cards,
        }
    }
}

/// Highest severity first. Equal severities carry no ordering promise.
pub fn order_cards(mut cards: Vec<Card>) -> OrderedCards {
    if cards.is_empty() {
        return OrderedCards::NoCards;
    }

    cards.sort_by(|a, b| b.indicator.rank().cmp(&a.indicator.rank()));
    OrderedCards::Cards(cards)
}
