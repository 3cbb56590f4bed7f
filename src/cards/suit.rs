/// Card suit.
///
/// Suits carry no comparison weight in Bloodjack. They matter only to the
/// Trickster wager, the Bloodsurge suit check and the final guess.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    H = 0,
    D = 1,
    C = 2,
    S = 3,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const fn all() -> [Suit; 4] {
        [Suit::H, Suit::D, Suit::C, Suit::S]
    }
    /// Unicode suit symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::H => '♥',
            Suit::D => '♦',
            Suit::C => '♣',
            Suit::S => '♠',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::H,
            1 => Suit::D,
            2 => Suit::C,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "h" | "♥" | "hearts" => Ok(Suit::H),
            "d" | "♦" | "diamonds" => Ok(Suit::D),
            "c" | "♣" | "clubs" => Ok(Suit::C),
            "s" | "♠" | "spades" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(suit, Suit::from(u8::from(suit)));
        }
    }

    #[test]
    fn parses_names_and_symbols() {
        assert_eq!(Suit::try_from("spades"), Ok(Suit::S));
        assert_eq!(Suit::try_from("♥"), Ok(Suit::H));
        assert_eq!(Suit::try_from(" D "), Ok(Suit::D));
        assert!(Suit::try_from("x").is_err());
    }
}
