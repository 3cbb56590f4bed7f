use super::prompt::Prompt;
use super::status::Status;
use crate::Position;

/// Why an action was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Illegal {
    NotPlaying(Status),
    Pending(Prompt),
    Unprompted,
    NoSuchPile(Position),
    Locked(Position),
    Empty(Position),
    Exhausted,
    Owed(u8),
    NoCredits,
    NoJokers,
    NothingLocked,
    Ineligible(Position),
}

impl std::fmt::Display for Illegal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Illegal::NotPlaying(s) => write!(f, "game is {}", s),
            Illegal::Pending(p) => write!(f, "awaiting {}", p),
            Illegal::Unprompted => write!(f, "nothing asked for that answer"),
            Illegal::NoSuchPile(i) => write!(f, "no pile {}", i + 1),
            Illegal::Locked(i) => write!(f, "pile {} is locked", i + 1),
            Illegal::Empty(i) => write!(f, "pile {} is empty", i + 1),
            Illegal::Exhausted => write!(f, "main pile is empty"),
            Illegal::Owed(n) => write!(f, "{} free placements owed", n),
            Illegal::NoCredits => write!(f, "no free placements"),
            Illegal::NoJokers => write!(f, "no jokers left"),
            Illegal::NothingLocked => write!(f, "no pile is locked"),
            Illegal::Ineligible(i) => write!(f, "pile {} cannot be unlocked", i + 1),
        }
    }
}

impl std::error::Error for Illegal {}
