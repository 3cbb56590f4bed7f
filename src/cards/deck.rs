use super::card::Card;
use super::rank::Rank;
use crate::PILES;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// An ordered stack of cards, front first.
///
/// A Bloodjack deck starts as the 52-card set without the Jack of Diamonds.
/// Before play the Ace of Spades is set aside and one uniformly random card
/// is stolen as the hidden target of the final guess, leaving 49 cards to
/// deal: three seeds for the play piles and the rest for the main pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// The 51 cards of a fresh deck, unshuffled.
    pub fn standard() -> Self {
        Self(
            (0..52u8)
                .map(Card::from)
                .filter(|c| *c != Card::EXCLUDED)
                .collect(),
        )
    }
    /// Builds a shuffled deck ready to deal, plus the hidden final card.
    ///
    /// Fails only if the reserved Ace of Spades is missing, which means the
    /// deck construction itself is broken.
    pub fn build<R: Rng>(rng: &mut R) -> anyhow::Result<(Self, Card)> {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck.reserve()?;
        let hidden = deck.steal(rng);
        Ok((deck, hidden))
    }
    /// Uniform Fisher–Yates shuffle.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Removes the Ace of Spades.
    pub fn reserve(&mut self) -> anyhow::Result<Card> {
        let index = self
            .0
            .iter()
            .position(|c| *c == Card::RESERVED)
            .ok_or_else(|| anyhow::anyhow!("{} missing from deck", Card::RESERVED))?;
        Ok(self.0.remove(index))
    }
    /// Removes a uniformly random card.
    pub fn steal<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(!self.0.is_empty());
        let index = rng.random_range(0..self.0.len());
        self.0.remove(index)
    }
    /// Splits off one seed card per pile and hands back the rest as the main pile.
    ///
    /// A Jack may never seed a pile. While one would, the whole deck is
    /// reshuffled and dealt again from scratch.
    pub fn deal<R: Rng>(mut self, rng: &mut R) -> ([Card; PILES], VecDeque<Card>) {
        debug_assert!(self.0.len() >= PILES);
        while self.0.iter().take(PILES).any(|c| c.rank() == Rank::Jack) {
            log::trace!("jack in seed cards, reshuffling");
            self.shuffle(rng);
        }
        let mut main = VecDeque::from(self.0);
        let seeds = std::array::from_fn(|_| main.pop_front().expect("deck covers every pile"));
        (seeds, main)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAIN_PILE_SIZE;
    use crate::cards::Suit;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn standard_has_51_cards_without_excluded() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 51);
        assert!(!deck.contains(&Card::EXCLUDED));
        assert_eq!(deck.cards().iter().collect::<HashSet<_>>().len(), 51);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        assert_eq!(deck.len(), 51);
        assert_ne!(deck, Deck::standard());
        let mut sorted = Vec::from(deck);
        sorted.sort();
        let mut fresh = Vec::from(Deck::standard());
        fresh.sort();
        assert_eq!(sorted, fresh);
    }

    #[test]
    fn build_partitions_the_full_set() {
        for seed in 0..256 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let (deck, hidden) = Deck::build(rng).expect("standard deck");
            assert_eq!(deck.len(), 49);
            assert!(!deck.contains(&Card::EXCLUDED));
            assert!(!deck.contains(&Card::RESERVED));
            assert!(!deck.contains(&hidden));
            assert_ne!(hidden, Card::RESERVED);
            assert_ne!(hidden, Card::EXCLUDED);
            let mut all = deck.cards().iter().copied().collect::<HashSet<_>>();
            assert_eq!(all.len(), 49);
            all.insert(hidden);
            all.insert(Card::RESERVED);
            all.insert(Card::EXCLUDED);
            assert_eq!(all.len(), 52);
        }
    }

    #[test]
    fn reserve_fails_without_ace_of_spades() {
        let mut deck = Deck::from(vec![Card::new(Rank::Two, Suit::H)]);
        assert!(deck.reserve().is_err());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn deal_never_seeds_a_jack() {
        for seed in 0..512 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let (deck, _) = Deck::build(rng).expect("standard deck");
            let (seeds, main) = deck.deal(rng);
            assert!(seeds.iter().all(|c| c.rank() != Rank::Jack));
            assert_eq!(main.len(), MAIN_PILE_SIZE);
            let dealt = seeds
                .iter()
                .chain(main.iter())
                .copied()
                .collect::<HashSet<_>>();
            assert_eq!(dealt.len(), 49);
        }
    }

    #[test]
    fn deal_keeps_a_jackless_top() {
        let cards = (0..52u8)
            .map(Card::from)
            .filter(|c| c.rank() != Rank::Jack)
            .collect::<Vec<_>>();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let (seeds, main) = Deck::from(cards.clone()).deal(rng);
        assert_eq!(seeds.as_slice(), &cards[..PILES]);
        assert_eq!(main.front(), cards.get(PILES));
    }
}
