//! # Deterministic deck shuffling
//!
//! deckhand keeps named decks of playing cards, draws from the top, and shuffles with a
//! linear-feedback shift register seeded by a single number, the fingerprint of the shuffle
//! action. The same fingerprint always produces the same order.
//!
//! The core is the [`lfsr`] generator and the Fisher-Yates passes in [`shuffle`]. [`deck`] and
//! [`table`] hold the state a page keeps around them, and [`wasm`] exposes that state to the browser.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate rand;
extern crate regex;
extern crate wasm_bindgen;

pub mod card;
pub mod config;
#[macro_use]
pub mod deck;
pub mod error;
pub mod fingerprint;
pub mod lfsr;
pub mod shuffle;
pub mod table;
pub mod wasm;

pub use crate::config::ShuffleConfig;
pub use crate::deck::Deck;
pub use crate::error::{DeckError, ShuffleError};
pub use crate::lfsr::{Lfsr, Polynomial};
pub use crate::shuffle::{shuffle, shuffle_in_place, shuffle_passes};
pub use crate::table::Table;
