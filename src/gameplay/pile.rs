use super::lock::Lock;
use crate::cards::Card;

/// One of the three play piles.
///
/// Cards stack bottom to top, and only the top card takes part in guesses.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Pile {
    cards: Vec<Card>,
    lock: Lock,
}

impl Pile {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn lock(&self) -> Lock {
        self.lock
    }
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
    pub fn is_sealed(&self) -> bool {
        self.lock.is_sealed()
    }
    /// Whether any Queen or King sits anywhere in the pile.
    pub fn has_royalty(&self) -> bool {
        self.cards.iter().any(Card::is_royal)
    }
}

/// Mutation
impl Pile {
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
    pub fn reset_lock(&mut self, lock: Lock) {
        self.lock = lock;
    }
    /// Discards every card and starts over from `seed`, unlocked.
    /// With no seed the pile is left empty.
    pub fn reset(&mut self, seed: Option<Card>) {
        self.cards.clear();
        self.cards.extend(seed);
        self.lock = Lock::Open;
    }
}

impl From<Card> for Pile {
    fn from(seed: Card) -> Self {
        Self::from(vec![seed])
    }
}
impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards,
            lock: Lock::Open,
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.top() {
            Some(top) => write!(f, "{:>3} ({:>2}) {}", top.to_string(), self.len(), self.lock),
            None => write!(f, " -- ( 0) {}", self.lock),
        }
    }
}
