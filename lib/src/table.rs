//! # Table state
//!
//! `Table` holds every deck the user has created, which one is selected, and the card
//! most recently drawn. The browser keeps one `Table` and persists its decks between visits.
use crate::card::OrientedCard;
use crate::config::ShuffleConfig;
use crate::deck::Deck;
use crate::error::DeckError;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
  decks: Vec<Deck>,
  /// None if and only if no deck is selected
  current_deck_index: Option<usize>,
  current_card: Option<OrientedCard>,
}

impl Table {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a table over `decks` with the first deck selected, if any
  pub fn from_decks(decks: Vec<Deck>) -> Self {
    let current_deck_index = if decks.is_empty() { None } else { Some(0) };
    Self {
      decks,
      current_deck_index,
      current_card: None,
    }
  }

  pub fn decks(&self) -> &[Deck] {
    &self.decks
  }

  pub fn current_deck_index(&self) -> Option<usize> {
    self.current_deck_index
  }

  pub fn current_deck(&self) -> Option<&Deck> {
    self.current_deck_index.and_then(|index| self.decks.get(index))
  }

  /// Returns the card most recently drawn
  pub fn current_card(&self) -> Option<&OrientedCard> {
    self.current_card.as_ref()
  }

  /// Adds `deck` and selects it
  pub fn add_deck(&mut self, deck: Deck) {
    debug!("Creating new deck named {}", deck.name);
    self.current_deck_index = Some(self.decks.len());
    self.decks.push(deck);
  }

  pub fn select_deck(&mut self, index: usize) -> Result<(), DeckError> {
    self.check_index(index)?;
    debug!("Selecting deck {}", index);
    self.current_deck_index = Some(index);
    Ok(())
  }

  /// Removes the selected deck and clears the selection
  pub fn delete_current_deck(&mut self) -> Result<Deck, DeckError> {
    let index = self.selected_index()?;
    self.check_index(index)?;
    debug!("Deleting deck {}", index);
    self.current_deck_index = None;
    Ok(self.decks.remove(index))
  }

  /// Draws from the selected deck, moving the top card to the bottom, and records it
  pub fn draw(&mut self) -> Result<OrientedCard, DeckError> {
    let deck = self.selected_deck_mut()?;
    let card = deck
      .draw()
      .ok_or_else(|| DeckError::EmptyDeck(deck.name.clone()))?;
    info!("Drew {}", card);
    self.current_card = Some(card.clone());
    Ok(card)
  }

  /// Shuffles the selected deck with a generator seeded by `fingerprint`
  pub fn shuffle(&mut self, fingerprint: u32, config: &ShuffleConfig) -> Result<(), DeckError> {
    self.selected_deck_mut()?.shuffle(fingerprint, config)?;
    Ok(())
  }

  /// Serializes the decks, which is all the browser keeps between visits
  pub fn saved_state(&self) -> Result<String, DeckError> {
    Ok(serde_json::to_string(&self.decks)?)
  }

  /// Restores a table from `saved_state` output, selecting the first deck
  pub fn from_saved_state(saved: &str) -> Result<Self, DeckError> {
    let decks: Vec<Deck> = serde_json::from_str(saved)?;
    Ok(Self::from_decks(decks))
  }

  /// Serializes the whole table, selection and drawn card included
  pub fn to_json(&self) -> Result<String, DeckError> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Deserializes a whole table, rejecting a selection that points past the decks
  pub fn from_json(json: &str) -> Result<Self, DeckError> {
    let table: Self = serde_json::from_str(json)?;
    table.validated()
  }

  pub(crate) fn validated(self) -> Result<Self, DeckError> {
    if let Some(index) = self.current_deck_index {
      self.check_index(index)?;
    }
    Ok(self)
  }

  fn check_index(&self, index: usize) -> Result<(), DeckError> {
    if index >= self.decks.len() {
      warn!("Deck {} is out of range for {} decks", index, self.decks.len());
      return Err(DeckError::DeckIndexOutOfRange {
        index,
        len: self.decks.len(),
      });
    }
    Ok(())
  }

  fn selected_deck_mut(&mut self) -> Result<&mut Deck, DeckError> {
    let index = self.selected_index()?;
    self.check_index(index)?;
    Ok(&mut self.decks[index])
  }

  fn selected_index(&self) -> Result<usize, DeckError> {
    self.current_deck_index.ok_or_else(|| {
      warn!("No deck is selected");
      DeckError::NoDeckSelected
    })
  }
}

#[cfg(test)]
mod tests {
  use crate::card::OrientedCard;
  use crate::config::ShuffleConfig;
  use crate::deck::Deck;
  use crate::error::{DeckError, ShuffleError};
  use crate::table::*;

  fn table_with_two_decks() -> Table {
    let mut table = Table::new();
    table.add_deck(decklist!("Letters", "A\nB\nC\nD"));
    table.add_deck(Deck::standard("Poker"));
    table
  }

  #[test]
  fn new_table_has_no_selection() {
    let table = Table::new();
    assert!(table.decks().is_empty());
    assert_eq!(table.current_deck_index(), None);
    assert_eq!(table.current_deck(), None);
    assert_eq!(table.current_card(), None);
  }

  #[test]
  fn new_deck_becomes_selected() {
    let table = table_with_two_decks();
    assert_eq!(table.current_deck_index(), Some(1));
    assert_eq!(table.current_deck().unwrap().name, "Poker");
  }

  #[test]
  fn select_out_of_range() {
    let mut table = table_with_two_decks();
    let err = table.select_deck(2).unwrap_err();
    assert!(matches!(err, DeckError::DeckIndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(table.current_deck_index(), Some(1));
  }

  #[test]
  fn draw_records_current_card() {
    let mut table = table_with_two_decks();
    table.select_deck(0).unwrap();
    let card = table.draw().unwrap();
    assert_eq!(card, OrientedCard::face_up("A"));
    assert_eq!(table.current_card(), Some(&card));
    let letters: Vec<_> = table
      .current_deck()
      .unwrap()
      .iter()
      .map(|c| c.card.name.clone())
      .collect();
    assert_eq!(letters, vec!["B", "C", "D", "A"]);
  }

  #[test]
  fn draw_without_selection() {
    let mut table = Table::new();
    assert!(matches!(table.draw(), Err(DeckError::NoDeckSelected)));
  }

  #[test]
  fn draw_from_empty_deck() {
    let mut table = Table::new();
    table.add_deck(Deck::new("Empty"));
    match table.draw() {
      Err(DeckError::EmptyDeck(name)) => assert_eq!(name, "Empty"),
      other => panic!("unexpected {:?}", other),
    }
    assert_eq!(table.current_card(), None);
  }

  #[test]
  fn shuffle_touches_only_the_selected_deck() {
    let mut table = table_with_two_decks();
    table.select_deck(0).unwrap();
    table.shuffle(42, &ShuffleConfig::default()).unwrap();
    let letters: Vec<_> = table.decks()[0]
      .iter()
      .map(|c| c.card.name.as_str())
      .collect();
    assert_eq!(letters, vec!["A", "D", "C", "B"]);
    assert_eq!(table.decks()[1], Deck::standard("Poker"));
  }

  #[test]
  fn shuffle_with_zero_fingerprint() {
    let mut table = table_with_two_decks();
    let err = table.shuffle(0, &ShuffleConfig::default()).unwrap_err();
    assert!(matches!(err, DeckError::Shuffle(ShuffleError::InvalidSeed(0))));
  }

  #[test]
  fn delete_clears_selection() {
    let mut table = table_with_two_decks();
    let deleted = table.delete_current_deck().unwrap();
    assert_eq!(deleted.name, "Poker");
    assert_eq!(table.decks().len(), 1);
    assert_eq!(table.current_deck_index(), None);
    assert!(matches!(
      table.delete_current_deck(),
      Err(DeckError::NoDeckSelected)
    ));
  }

  #[test]
  fn saved_state_selects_first_deck() {
    let mut table = table_with_two_decks();
    table.draw().unwrap();
    let saved = table.saved_state().unwrap();
    let restored = Table::from_saved_state(&saved).unwrap();
    assert_eq!(restored.decks(), table.decks());
    assert_eq!(restored.current_deck_index(), Some(0));
    assert_eq!(restored.current_card(), None);
  }

  #[test]
  fn empty_saved_state_has_no_selection() {
    let restored = Table::from_saved_state("[]").unwrap();
    assert_eq!(restored.current_deck_index(), None);
  }

  #[test]
  fn json_keeps_selection_and_card() {
    let mut table = table_with_two_decks();
    table.select_deck(0).unwrap();
    table.draw().unwrap();
    let restored = Table::from_json(&table.to_json().unwrap()).unwrap();
    assert_eq!(restored, table);
  }

  #[test]
  fn json_with_dangling_selection_is_rejected() {
    let json = r#"{"decks": [], "current_deck_index": 0, "current_card": null}"#;
    assert!(matches!(
      Table::from_json(json),
      Err(DeckError::DeckIndexOutOfRange { index: 0, len: 0 })
    ));
  }

  #[test]
  fn deserialized_dangling_selection_does_not_panic() {
    let json = r#"{"decks": [], "current_deck_index": 0, "current_card": null}"#;
    let mut table: Table = serde_json::from_str(json).unwrap();
    assert_eq!(table.current_deck(), None);
    assert!(matches!(
      table.draw(),
      Err(DeckError::DeckIndexOutOfRange { index: 0, len: 0 })
    ));
    assert!(matches!(
      table.shuffle(42, &ShuffleConfig::default()),
      Err(DeckError::DeckIndexOutOfRange { index: 0, len: 0 })
    ));
    assert!(matches!(
      table.delete_current_deck(),
      Err(DeckError::DeckIndexOutOfRange { index: 0, len: 0 })
    ));
  }

  #[test]
  fn malformed_json_is_rejected() {
    assert!(matches!(
      Table::from_saved_state("{not json"),
      Err(DeckError::Json(_))
    ));
  }
}
