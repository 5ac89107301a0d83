//! Card system: categories, dealt cards and the deck.
//!
//! - `Category`: named collection of items (static data)
//! - `CategoryRegistry`: lookup by category name
//! - `Card`: one dealt tile with its reveal/match flags
//! - `Deck`: the cards of one round, in board order

pub mod card;
pub mod category;
pub mod deck;
pub mod registry;

pub use card::Card;
pub use category::{Category, Item};
pub use deck::Deck;
pub use registry::{CategoryError, CategoryRegistry};
