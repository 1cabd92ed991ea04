use crate::pack::card::{Card, PackId};
use crate::service::CardRecord;

/// The pack currently on display.
///
/// A session is never merged with another one: each successful request
/// builds a fresh session that replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackSession {
    pack_id: Option<PackId>,
    cards: Vec<Card>,
}

impl PackSession {
    /// Build a session from an opened pack. Every card starts face down.
    pub fn new(pack_id: PackId, records: Vec<CardRecord>) -> Self {
        Self {
            pack_id: Some(pack_id),
            cards: records.into_iter().map(Card::from_record).collect(),
        }
    }

    pub fn pack_id(&self) -> Option<&PackId> {
        self.pack_id.as_ref()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_revealed()).count()
    }

    /// Flip the card at `index`, leaving every other card untouched.
    ///
    /// Returns `false` when the index is out of range or the card was
    /// already face up.
    pub(crate) fn reveal(&mut self, index: usize) -> bool {
        self.cards.get_mut(index).is_some_and(Card::reveal)
    }
}
