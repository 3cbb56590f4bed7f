//! Card representation and deck construction.
//!
//! - [`Rank`] — Ace low, with the game's comparison values
//! - [`Suit`] — hearts, diamonds, clubs, spades
//! - [`Card`] — an immutable `(Rank, Suit)` pair
//! - [`Deck`] — shuffling, reserving, stealing the hidden card and dealing
mod card;
mod deck;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use rank::*;
pub use suit::*;
