/// Which way the next card is called relative to a pile's top card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    pub const fn all() -> [Direction; 2] {
        [Direction::Higher, Direction::Lower]
    }
    /// Judges a guess from `next.value() - top.value()`.
    /// Ties count as correct in both directions.
    pub fn admits(&self, diff: i8) -> bool {
        diff == 0
            || match self {
                Direction::Higher => diff > 0,
                Direction::Lower => diff < 0,
            }
    }
}

impl TryFrom<&str> for Direction {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hi" | "higher" => Ok(Direction::Higher),
            "l" | "lo" | "lower" => Ok(Direction::Lower),
            _ => Err(format!("invalid direction str: {}", s)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Direction::Higher => write!(f, "higher"),
            Direction::Lower => write!(f, "lower"),
        }
    }
}
