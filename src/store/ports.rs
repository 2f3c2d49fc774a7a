use crate::types::{CardKey, CardResponse};

/// Shared card source. Cards are only read from it and removal is only ever
/// requested, never performed by the interaction core itself.
pub trait CardStore: Send + Sync {
    /// Owned snapshot of the active cards.
    fn get_cards(&self) -> CardResponse;

    fn remove_card(&self, key: CardKey);
}
