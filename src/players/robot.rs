use super::player::Player;
use crate::Position;
use crate::Probability;
use crate::ROYALTY_BASELINE;
use crate::cards::Card;
use crate::cards::Rank;
use crate::gameplay::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A pick among the open piles: where to guess, which way, and how sure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hunch {
    pub pile: Position,
    pub direction: Direction,
    pub certainty: Probability,
}

/// Heuristic autoplay.
///
/// Every choice is a fixed rule of thumb except the final guess, which is
/// a uniformly random rank. The robot never looks at the hidden card or
/// the order of the main pile, only at the remaining composition when
/// judging royalty.
pub struct Robot {
    rng: SmallRng,
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Robot {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Which way to call against `top`, and the chance it comes good
    /// assuming the eleven in-between values are equally likely.
    pub fn hunch(top: Card) -> (Direction, Probability) {
        match top.value() {
            v if v <= 1 => (Direction::Higher, 1.),
            v if v >= 13 => (Direction::Lower, 1.),
            v => {
                let higher = (13 - v) as Probability / 12.;
                let lower = (v - 2) as Probability / 12.;
                match higher >= lower {
                    true => (Direction::Higher, higher),
                    false => (Direction::Lower, lower),
                }
            }
        }
    }
    /// The surest call across unlocked piles. The first pile wins ties.
    pub fn guess(game: &Game) -> Option<Hunch> {
        game.piles()
            .iter()
            .enumerate()
            .filter(|(_, pile)| !pile.is_locked())
            .filter_map(|(i, pile)| pile.top().map(|top| (i, Self::hunch(top))))
            .map(|(pile, (direction, certainty))| Hunch {
                pile,
                direction,
                certainty,
            })
            .fold(None, |best, hunch| match best {
                Some(best) if best.certainty >= hunch.certainty => Some(best),
                _ => Some(hunch),
            })
    }
    /// The unlocked pile with the fewest cards. The first pile wins ties.
    pub fn placement(game: &Game) -> Option<Position> {
        game.piles()
            .iter()
            .enumerate()
            .filter(|(_, pile)| !pile.is_locked())
            .min_by_key(|(_, pile)| pile.len())
            .map(|(i, _)| i)
    }
    /// Calls royalty when Queens and Kings are richer in what remains of
    /// the main pile than in a full deck.
    pub fn royalty(game: &Game) -> bool {
        let main = game.main();
        match main.len() {
            0 => false,
            n => {
                let royals = main.iter().filter(|c| c.is_royal()).count();
                royals as Probability / n as Probability > ROYALTY_BASELINE
            }
        }
    }
    fn rank(&mut self) -> Rank {
        Rank::from(self.rng.random_range(0..13u8))
    }
}

impl Player for Robot {
    fn decide(&mut self, game: &Game) -> Action {
        let action = match game.phase() {
            Phase::Prompt(Prompt::Royalty(i)) => Action::Royalty(i, Self::royalty(game)),
            Phase::Prompt(Prompt::Trickster(i)) => Action::Trickster(i, Wager::default()),
            Phase::Prompt(Prompt::Unlock { candidates, .. }) => candidates
                .first()
                .copied()
                .map(Action::Unlock)
                .expect("bloodsurge offers at least one pile"),
            Phase::Prompt(Prompt::FinalGuess) => Action::Final(self.rank(), None),
            Phase::Prompt(Prompt::JokerRetry) => Action::Concede,
            Phase::Joker => Action::Joker,
            Phase::Place => Self::placement(game)
                .map(Action::Place)
                .unwrap_or(Action::Forfeit),
            Phase::Guess => Self::guess(game)
                .map(|h| Action::Guess(h.pile, h.direction))
                .unwrap_or(Action::Joker),
            phase @ (Phase::Idle | Phase::Over(_)) => {
                unreachable!("robot asked to move while {}", phase)
            }
        };
        log::trace!("robot chooses {}", action);
        action
    }
}
