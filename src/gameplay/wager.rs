use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;

/// A Trickster wager: an optional rank call and an optional suit call on
/// the card that follows a Ten.
///
/// Declining both is allowed and costs nothing. Any call that is made and
/// misses locks the pile, even when the other call hits.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Wager {
    pub rank: Option<Rank>,
    pub suit: Option<Suit>,
}

impl Wager {
    pub fn new(rank: Option<Rank>, suit: Option<Suit>) -> Self {
        Self { rank, suit }
    }
    /// Every possible wager, the declined one first.
    pub fn all() -> Vec<Wager> {
        std::iter::once(None)
            .chain(Rank::all().into_iter().map(Some))
            .flat_map(|rank| {
                std::iter::once(None)
                    .chain(Suit::all().into_iter().map(Some))
                    .map(move |suit| Wager::new(rank, suit))
            })
            .collect()
    }
    pub fn is_declined(&self) -> bool {
        self.rank.is_none() && self.suit.is_none()
    }
    pub fn hits_rank(&self, card: Card) -> bool {
        self.rank == Some(card.rank())
    }
    pub fn hits_suit(&self, card: Card) -> bool {
        self.suit == Some(card.suit())
    }
    /// Whether any call that was made is wrong.
    pub fn misses(&self, card: Card) -> bool {
        self.rank.is_some_and(|r| r != card.rank()) || self.suit.is_some_and(|s| s != card.suit())
    }
}

impl std::fmt::Display for Wager {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.rank, self.suit) {
            (None, None) => write!(f, "no wager"),
            (Some(r), None) => write!(f, "rank {}", r),
            (None, Some(s)) => write!(f, "suit {}", s),
            (Some(r), Some(s)) => write!(f, "{}{}", r, s),
        }
    }
}
