use super::prompt::Prompt;
use super::status::Status;

/// What the game expects next. Derived from state, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Not started yet.
    Idle,
    /// Higher or lower on an unlocked pile.
    Guess,
    /// Free placements are owed.
    Place,
    /// Every pile is locked and a Joker is the only way on.
    Joker,
    /// A prompt must be answered.
    Prompt(Prompt),
    /// Won or lost.
    Over(Status),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Guess => write!(f, "guess"),
            Phase::Place => write!(f, "place"),
            Phase::Joker => write!(f, "joker"),
            Phase::Prompt(p) => write!(f, "{}", p),
            Phase::Over(s) => write!(f, "{}", s),
        }
    }
}
