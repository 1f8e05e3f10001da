//! # Internal card representation
//!
use std::fmt;

/// Card is the identity of a single card, independent of how it lies in the deck
#[derive(Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The display name of the card, e.g. "Ace of Spades"
    pub name: String,
}

/// Orientation is whether a card lies face up or face down in the deck
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    FaceUp,
    FaceDown,
}

/// OrientedCard is the element type of every deck: a card and the way it lies
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrientedCard {
    pub card: Card,
    pub orientation: Orientation,
}

impl Card {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::FaceUp
    }
}

impl OrientedCard {
    pub fn new(card: Card, orientation: Orientation) -> Self {
        Self { card, orientation }
    }

    pub fn face_up(name: &str) -> Self {
        Self::new(Card::new(name), Orientation::FaceUp)
    }

    pub fn face_down(name: &str) -> Self {
        Self::new(Card::new(name), Orientation::FaceDown)
    }
}

impl From<Card> for OrientedCard {
    fn from(card: Card) -> Self {
        Self::new(card, Orientation::FaceUp)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for OrientedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::FaceUp => write!(f, "{}", self.card),
            Orientation::FaceDown => write!(f, "{} (down)", self.card),
        }
    }
}
