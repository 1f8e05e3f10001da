mod card;
mod standard;

pub use card::*;
pub use standard::*;
