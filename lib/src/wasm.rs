//! # Browser interface
//!
//! Every entry point takes a serialized `Table` plus its arguments and returns the updated
//! `Table`, or a string describing the error. The page keeps the returned table as its state.
//!
//! ```js
//!  const { deckhand_shuffle } = require('deckhand');
//!  table = deckhand_shuffle({ table, fingerprint: Date.now() });
//! ```
use crate::config::ShuffleConfig;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::fingerprint;
use crate::table::Table;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Debug, Serialize, Deserialize)]
struct ShuffleInput {
    pub table: Table,
    /// Any integer, folded into a non-zero seed for the configured register
    pub fingerprint: i64,
    #[serde(default)]
    pub config: ShuffleConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct TableInput {
    pub table: Table,
}

#[derive(Debug, Serialize, Deserialize)]
struct NewDeckInput {
    pub table: Table,
    /// Name of the new deck
    pub name: String,
    /// Deck list, see `Deck::from_list`
    pub list: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct SelectInput {
    pub table: Table,
    pub index: usize,
}

/// Shuffles the selected deck of `input.table` with `input.fingerprint`
#[wasm_bindgen]
pub fn deckhand_shuffle(input: &JsValue) -> JsValue {
    run(input, shuffle_impl)
}

/// Draws the top card of the selected deck into `current_card`
#[wasm_bindgen]
pub fn deckhand_draw(input: &JsValue) -> JsValue {
    run(input, draw_impl)
}

/// Adds and selects a deck parsed from `input.list`
#[wasm_bindgen]
pub fn deckhand_new_deck(input: &JsValue) -> JsValue {
    run(input, new_deck_impl)
}

#[wasm_bindgen]
pub fn deckhand_select_deck(input: &JsValue) -> JsValue {
    run(input, select_impl)
}

/// Deletes the selected deck. Asking the user for confirmation is up to the page
#[wasm_bindgen]
pub fn deckhand_delete_deck(input: &JsValue) -> JsValue {
    run(input, delete_impl)
}

/// Restores a table from the string produced by `deckhand_save`
#[wasm_bindgen]
pub fn deckhand_load(saved: &str) -> JsValue {
    respond(Table::from_saved_state(saved))
}

/// Returns the string to keep in local storage for `input.table`
#[wasm_bindgen]
pub fn deckhand_save(input: &JsValue) -> JsValue {
    let input: TableInput = match input.into_serde() {
        Err(e) => {
            return JsValue::from_str(&format!("Error deserializing table: {:#?}", e));
        }
        Ok(v) => v,
    };
    match input.table.saved_state() {
        Err(e) => JsValue::from_str(&format!("Error saving table: {}", e)),
        Ok(saved) => JsValue::from_str(&saved),
    }
}

fn run<I, F>(input: &JsValue, f: F) -> JsValue
where
    I: DeserializeOwned,
    F: FnOnce(I) -> Result<Table, DeckError>,
{
    let input: I = match input.into_serde() {
        Err(e) => {
            return JsValue::from_str(&format!("Error deserializing deckhand input: {:#?}", e));
        }
        Ok(v) => v,
    };
    respond(f(input))
}

fn respond<T: Serialize>(result: Result<T, DeckError>) -> JsValue {
    let output = match result {
        Err(e) => {
            warn!("Rejected deckhand input: {}", e);
            return JsValue::from_str(&format!("Error: {}", e));
        }
        Ok(v) => v,
    };
    JsValue::from_serde(&output)
        .unwrap_or_else(|e| JsValue::from_str(&format!("Error serializing output: {}", e)))
}

fn shuffle_impl(input: ShuffleInput) -> Result<Table, DeckError> {
    let mut table = input.table.validated()?;
    let seed = fingerprint::fold(input.fingerprint, input.config.polynomial);
    table.shuffle(seed, &input.config)?;
    Ok(table)
}

fn draw_impl(input: TableInput) -> Result<Table, DeckError> {
    let mut table = input.table.validated()?;
    table.draw()?;
    Ok(table)
}

fn new_deck_impl(input: NewDeckInput) -> Result<Table, DeckError> {
    let mut table = input.table.validated()?;
    table.add_deck(Deck::from_list(&input.name, &input.list)?);
    Ok(table)
}

fn select_impl(input: SelectInput) -> Result<Table, DeckError> {
    let mut table = input.table.validated()?;
    table.select_deck(input.index)?;
    Ok(table)
}

fn delete_impl(input: TableInput) -> Result<Table, DeckError> {
    let mut table = input.table.validated()?;
    table.delete_current_deck()?;
    Ok(table)
}
