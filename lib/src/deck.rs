//! # Named decks
//!
use crate::card::{standard_cards, Card, Orientation, OrientedCard};
use crate::config::ShuffleConfig;
use crate::error::{DeckError, ShuffleError};
use crate::lfsr::Lfsr;
use crate::shuffle::shuffle_passes;
use regex::Regex;
use std::ops::Deref;

/// Largest card count a single deck list line may ask for
pub const MAX_COPIES: usize = 1000;

/// Deck is a named, ordered pile of cards. Index 0 is the top of the deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
  pub name: String,
  pub cards: Vec<OrientedCard>,
}

#[derive(Debug, Clone)]
pub struct DeckBuilder {
  name: String,
  cards: Vec<OrientedCard>,
}

impl DeckBuilder {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      cards: Vec::new(),
    }
  }

  pub fn insert(self, card: OrientedCard) -> Self {
    self.insert_count(card, 1)
  }

  pub fn insert_count(mut self, card: OrientedCard, count: usize) -> Self {
    for _ in 0..count {
      self.cards.push(card.clone());
    }
    self
  }

  pub fn build(self) -> Deck {
    Deck {
      name: self.name,
      cards: self.cards,
    }
  }
}

impl Deck {
  /// Returns an empty deck named `name`
  pub fn new(name: &str) -> Self {
    DeckBuilder::new(name).build()
  }

  /// Returns a face up, unshuffled 52-card deck named `name`
  pub fn standard(name: &str) -> Self {
    Self::from_cards(name, standard_cards())
  }

  /// Returns a deck of face up cards in iteration order
  pub fn from_cards<I>(name: &str, cards: I) -> Self
  where
    I: IntoIterator<Item = Card>,
  {
    let mut b = DeckBuilder::new(name);
    for card in cards {
      b = b.insert(card.into());
    }
    b.build()
  }

  /// Parses a deck list with one entry per line, in `[count] <card name> [(down)]` form
  ///
  /// Blank lines and lines starting with `#` are skipped. The count defaults to 1 and may
  /// not exceed `MAX_COPIES`.
  pub fn from_list(name: &str, list: &str) -> Result<Self, DeckError> {
    lazy_static! {
        static ref DECK_LINE_REGEX: Regex =
            Regex::new(r"^\s*(?:(?P<count>\d+)\s+)?(?P<name>.+?)\s*(?P<down>\((?i:down)\))?\s*$")
                .expect("Failed to compile DECK_LINE_REGEX regex");
    }
    let name = name.trim();
    if name.is_empty() {
      return Err(DeckError::BadDeckList("deck name is empty".to_string()));
    }
    let mut builder = DeckBuilder::new(name);
    for line in list.lines() {
      let trimmed = line.trim();
      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }
      let caps = DECK_LINE_REGEX
        .captures(trimmed)
        .ok_or_else(|| DeckError::BadDeckList(format!("cannot read deck list line: {}", line)))?;
      let count = match caps.name("count") {
        Some(count) => count.as_str().parse::<usize>().map_err(|_| {
          DeckError::BadDeckList(format!("cannot parse card count from line: {}", line))
        })?,
        None => 1,
      };
      if count > MAX_COPIES {
        return Err(DeckError::BadDeckList(format!(
          "card count {} is above {} in line: {}",
          count, MAX_COPIES, line
        )));
      }
      let orientation = if caps.name("down").is_some() {
        Orientation::FaceDown
      } else {
        Orientation::FaceUp
      };
      let card = OrientedCard::new(Card::new(&caps["name"]), orientation);
      builder = builder.insert_count(card, count);
    }
    Ok(builder.build())
  }

  pub fn len(&self) -> usize {
    self.cards.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }

  /// Returns the card on top of the deck
  pub fn top(&self) -> Option<&OrientedCard> {
    self.cards.first()
  }

  /// Draws the top card and returns it to the bottom of the deck
  pub fn draw(&mut self) -> Option<OrientedCard> {
    if self.cards.is_empty() {
      return None;
    }
    self.cards.rotate_left(1);
    self.cards.last().cloned()
  }

  /// Reorders the deck with a generator seeded by `fingerprint`, applying `config.passes` passes
  pub fn shuffle(&mut self, fingerprint: u32, config: &ShuffleConfig) -> Result<(), ShuffleError> {
    let mut lfsr = Lfsr::with_polynomial(fingerprint, config.polynomial)?;
    debug!(
      "Shuffling deck {} ({} cards, {} passes)",
      self.name,
      self.cards.len(),
      config.passes
    );
    self.cards = shuffle_passes(&self.cards, &mut lfsr, config.passes);
    Ok(())
  }
}

impl Deref for Deck {
  type Target = [OrientedCard];

  fn deref(&self) -> &Self::Target {
    &self.cards
  }
}

#[macro_export]
macro_rules! decklist {
  ($name:expr, $list:expr) => {
    $crate::deck::Deck::from_list($name, $list)
      .unwrap_or_else(|e| panic!("Bad deck list: {}", e))
  };
}
