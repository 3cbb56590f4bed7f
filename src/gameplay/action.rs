use super::direction::Direction;
use super::wager::Wager;
use crate::Position;
use crate::cards::Rank;
use crate::cards::Suit;

/// Everything a player can ask of a [`super::Game`].
///
/// Pile positions are zero-based here and one-based in every message the
/// game writes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Higher or lower on an unlocked pile.
    Guess(Position, Direction),
    /// Spend one free placement on an unlocked pile.
    Place(Position),
    /// Give up the remaining free placements.
    Forfeit,
    /// Clear and reseed all three piles.
    Joker,
    /// Answer the lone-King prompt: will the next card be a Queen or King?
    Royalty(Position, bool),
    /// Answer the Trickster prompt.
    Trickster(Position, Wager),
    /// Pick the pile Bloodsurge reopens.
    Unlock(Position),
    /// Name the hidden card. The suit is optional.
    Final(Rank, Option<Suit>),
    /// Spend a Joker on another final guess.
    Retry,
    /// Decline the retry and take the loss.
    Concede,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Guess(i, d) => write!(f, "guess {} on pile {}", d, i + 1),
            Action::Place(i) => write!(f, "place on pile {}", i + 1),
            Action::Forfeit => write!(f, "forfeit free cards"),
            Action::Joker => write!(f, "use joker"),
            Action::Royalty(i, true) => write!(f, "royalty on pile {}", i + 1),
            Action::Royalty(i, false) => write!(f, "no royalty on pile {}", i + 1),
            Action::Trickster(i, w) => write!(f, "trickster {} on pile {}", w, i + 1),
            Action::Unlock(i) => write!(f, "unlock pile {}", i + 1),
            Action::Final(r, None) => write!(f, "final guess {}", r),
            Action::Final(r, Some(s)) => write!(f, "final guess {}{}", r, s),
            Action::Retry => write!(f, "retry with joker"),
            Action::Concede => write!(f, "concede"),
        }
    }
}
