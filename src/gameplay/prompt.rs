use crate::Position;

/// A question the game is waiting on. While one is pending, only its
/// matching answer is accepted.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Prompt {
    /// A King landed on a pile with no royalty beneath it.
    Royalty(Position),
    /// A Ten landed and offers a wager.
    Trickster(Position),
    /// Bloodsurge drew a same-suit pair and may reopen one of `candidates`.
    Unlock {
        pile: Position,
        candidates: Vec<Position>,
    },
    /// The main pile is spent. Name the hidden card.
    FinalGuess,
    /// The final guess missed and a Joker is available for another.
    JokerRetry,
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Prompt::Royalty(i) => write!(f, "royalty guess for pile {}", i + 1),
            Prompt::Trickster(i) => write!(f, "trickster wager for pile {}", i + 1),
            Prompt::Unlock { candidates, .. } => write!(
                f,
                "unlock one of piles {}",
                candidates
                    .iter()
                    .map(|i| (i + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Prompt::FinalGuess => write!(f, "final guess"),
            Prompt::JokerRetry => write!(f, "joker retry"),
        }
    }
}
