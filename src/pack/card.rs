use std::fmt;

use crate::service::CardRecord;

/// Opaque pack identifier handed out by the pack service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackId(String);

impl PackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card inside a pack session.
///
/// `revealed` only ever goes from `false` to `true`. A card is hidden again
/// only by installing a whole new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub image_url: String,
    revealed: bool,
}

impl Card {
    /// Build an unrevealed card from a raw service record.
    pub fn from_record(record: CardRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            image_url: record.image_url,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flip the card face up. Returns `true` if the card was face down.
    pub(crate) fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> CardRecord {
        CardRecord {
            id: id.to_string(),
            name: format!("Card {id}"),
            image_url: format!("/images/{id}.png"),
        }
    }

    #[test]
    fn from_record_starts_face_down() {
        let card = Card::from_record(record("c1"));
        assert_eq!(card.id, "c1");
        assert_eq!(card.name, "Card c1");
        assert_eq!(card.image_url, "/images/c1.png");
        assert!(!card.is_revealed());
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut card = Card::from_record(record("c1"));
        assert!(card.reveal());
        assert!(card.is_revealed());
        assert!(!card.reveal());
        assert!(card.is_revealed());
    }

    #[test]
    fn pack_id_displays_raw_value() {
        let id = PackId::new("66a1f0");
        assert_eq!(id.to_string(), "66a1f0");
        assert_eq!(id.as_str(), "66a1f0");
    }
}
