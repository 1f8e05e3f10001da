//! # Error types
//!
use thiserror::Error;

/// Precondition violations raised by the generator and the shuffle core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
  /// The seed leaves the register in the all-zero state, which never changes
  #[error("seed {0:#x} leaves the register in the all-zero state")]
  InvalidSeed(u32),
  /// A bounded draw was requested over an empty range
  #[error("cannot draw from the empty range [0, {0})")]
  InvalidRange(usize),
}

/// Errors raised by the deck and table state layer
#[derive(Debug, Error)]
pub enum DeckError {
  #[error("no deck is selected")]
  NoDeckSelected,
  #[error("deck \"{0}\" has no cards to draw")]
  EmptyDeck(String),
  #[error("deck index {index} is out of range for {len} decks")]
  DeckIndexOutOfRange { index: usize, len: usize },
  #[error("bad deck list: {0}")]
  BadDeckList(String),
  #[error(transparent)]
  Shuffle(#[from] ShuffleError),
  #[error("bad saved state: {0}")]
  Json(#[from] serde_json::Error),
}
