//! Cards and the shared deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable rank + suit, compared by rank
//! - `Suit`: The four standard suits
//! - `Deck`: Draw pile + discard pile with automatic recycling
//! - `CardFilter`: Rank/suit filter for building custom decks

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit, DEFAULT_FACE_CARD_THRESHOLD, MAX_RANK, MIN_RANK};
pub use deck::{CardFilter, Deck};
