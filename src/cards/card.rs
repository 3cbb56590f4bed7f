use super::rank::Rank;
use super::suit::Suit;

/// A playing card. Immutable once created.
///
/// Cards are plain `(Rank, Suit)` pairs. The `u8` isomorphism maps the 52
/// cards onto `0..52` as `suit * 13 + rank`, which is the order the deck is
/// built in before shuffling.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// The card left out of every deck.
    pub const EXCLUDED: Self = Self::new(Rank::Jack, Suit::D);
    /// The card set aside before dealing.
    pub const RESERVED: Self = Self::new(Rank::Ace, Suit::S);

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Comparison value of the rank. See [`Rank::value`].
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
    /// Queen or King.
    pub fn is_royal(&self) -> bool {
        self.rank.is_royal()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self::new(rank, suit)
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) * 13 + u8::from(c.rank)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self::new(Rank::from(n % 13), Suit::from(n / 13))
    }
}

/// str isomorphism, e.g. "10♥", "Qs", "A♠"
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| format!("invalid card str: {}", s))?;
        let (rank, suit) = s.split_at(split);
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
