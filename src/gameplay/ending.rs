/// How a game ended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Ending {
    Guessed,
    Sealed,
    Locked,
    Missed,
    Reset,
}

impl Ending {
    pub fn is_win(&self) -> bool {
        matches!(self, Ending::Guessed)
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ending::Guessed => write!(f, "Win - Correct final guess"),
            Ending::Sealed => write!(f, "Loss - All piles locked by Jacks"),
            Ending::Locked => write!(f, "Loss - All piles locked"),
            Ending::Missed => write!(f, "Loss - Incorrect final guess"),
            Ending::Reset => write!(f, "Game reset by player"),
        }
    }
}

/// One line of game history, written when a game ends or is abandoned.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    ending: Ending,
    remaining: usize,
}

impl Summary {
    pub fn ending(&self) -> Ending {
        self.ending
    }
    /// Cards left in the main pile when the game ended.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
    pub fn is_win(&self) -> bool {
        self.ending.is_win()
    }
}

impl From<(Ending, usize)> for Summary {
    fn from((ending, remaining): (Ending, usize)) -> Self {
        Self { ending, remaining }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Game Over: {} (Main Pile Left: {})",
            self.ending, self.remaining
        )
    }
}
