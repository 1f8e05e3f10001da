#[macro_use]
extern crate log;
extern crate chrono;
extern crate deckhand;
extern crate env_logger;

use deckhand::config::ShuffleConfig;
use deckhand::deck::Deck;
use deckhand::error::DeckError;
use deckhand::fingerprint;
use deckhand::table::Table;
use std::env;
use std::path::Path;

const USAGE: &str = "usage: deckhand <state.json> <command>

commands:
  show
  new <name> [list-file]       create and select a deck, a standard 52 without a list
  select <index>
  delete                       delete the selected deck
  draw                         draw the top card and put it on the bottom
  shuffle [fingerprint] [passes]";

#[derive(Debug)]
enum Error {
    Usage(String),
    Deck(DeckError),
    Io(std::io::Error),
}

impl From<DeckError> for Error {
    fn from(error: DeckError) -> Self {
        Self::Deck(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

fn parse_arg<T: std::str::FromStr>(arg: &str, what: &str) -> Result<T, Error> {
    arg.parse::<T>()
        .map_err(|_| Error::Usage(format!("cannot parse {} from \"{}\"", what, arg)))
}

fn load(path: &Path) -> Result<Table, Error> {
    if !path.exists() {
        info!("No state at {}, starting an empty table", path.display());
        return Ok(Table::new());
    }
    let json = std::fs::read_to_string(path)?;
    Ok(Table::from_json(&json)?)
}

fn store(path: &Path, table: &Table) -> Result<(), Error> {
    std::fs::write(path, table.to_json()?)?;
    Ok(())
}

fn show(table: &Table) {
    if table.decks().is_empty() {
        println!("No decks");
    }
    for (i, deck) in table.decks().iter().enumerate() {
        let marker = if table.current_deck_index() == Some(i) {
            "*"
        } else {
            " "
        };
        println!("{} {}: {} ({} cards)", marker, i, deck.name, deck.len());
    }
    if let Some(deck) = table.current_deck() {
        for card in deck.iter() {
            println!("    {}", card);
        }
    }
    if let Some(card) = table.current_card() {
        println!("Last drawn: {}", card);
    }
}

fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(Error::Usage(USAGE.to_string()));
    }
    let path = Path::new(&args[1]);
    let command = args[2].as_str();
    let rest = &args[3..];
    let mut table = load(path)?;
    match command {
        "show" => {
            show(&table);
            return Ok(());
        }
        "new" => {
            let name = rest
                .first()
                .ok_or_else(|| Error::Usage("new needs a deck name".to_string()))?;
            let deck = match rest.get(1) {
                Some(list_path) => Deck::from_list(name, &std::fs::read_to_string(list_path)?)?,
                None => Deck::standard(name),
            };
            table.add_deck(deck);
        }
        "select" => {
            let index = rest
                .first()
                .ok_or_else(|| Error::Usage("select needs a deck index".to_string()))?;
            table.select_deck(parse_arg(index, "deck index")?)?;
        }
        "delete" => {
            let deck = table.delete_current_deck()?;
            println!("Deleted {}", deck.name);
        }
        "draw" => {
            let card = table.draw()?;
            println!("{}", card);
        }
        "shuffle" => {
            let config = match rest.get(1) {
                Some(arg) => ShuffleConfig::with_passes(parse_arg(arg, "pass count")?),
                None => ShuffleConfig::default(),
            };
            let fingerprint = match rest.first() {
                Some(arg) => parse_arg(arg, "fingerprint")?,
                None => fingerprint::from_datetime(chrono::Utc::now(), config.polynomial),
            };
            info!("Shuffling with fingerprint {}", fingerprint);
            table.shuffle(fingerprint, &config)?;
        }
        other => {
            return Err(Error::Usage(format!("unknown command {}\n\n{}", other, USAGE)));
        }
    }
    store(path, &table)?;
    show(&table);
    Ok(())
}
