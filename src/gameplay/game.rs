use super::*;
use crate::MAIN_PILE_SIZE;
use crate::MAX_JOKERS;
use crate::PILES;
use crate::Position;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Rank;
use crate::cards::Suit;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::VecDeque;

mod rules;
mod verdict;

/// The complete state of one game of Bloodjack.
///
/// Three play piles sit face up. The player calls the next card of the main
/// pile higher or lower against any unlocked pile's top card; wrong calls
/// lock the pile. Special ranks trigger effects on correct calls, and once
/// the main pile runs dry the player must name the hidden card to win.
///
/// # Transitions
///
/// State never changes in place from the outside. [`apply`](Self::apply)
/// clones, mutates the clone and hands it back inside a [`Transition`]
/// together with the [`Event`]s produced on the way. Illegal actions come
/// back rejected with the original state untouched.
///
/// After every accepted action the end-of-game checks run once, in order:
/// all piles sealed, all piles locked, main pile exhausted.
///
/// # Fields
///
/// - `main` — draw pile, front is next
/// - `piles` — the three play piles
/// - `hidden` — target of the final guess, never dealt
/// - `jokers` — 0 to [`MAX_JOKERS`]
/// - `credits` — free placements owed before guessing resumes
/// - `paired` — free placements came from a King/Queen pair
/// - `hot`, `cold` — current correct and incorrect streaks
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    main: VecDeque<Card>,
    piles: [Pile; PILES],
    hidden: Card,
    jokers: u8,
    credits: u8,
    paired: bool,
    hot: u32,
    cold: u32,
    stats: Stats,
    status: Status,
    prompt: Option<Prompt>,
    ending: Option<Ending>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction.
impl Game {
    /// A freshly dealt game, not yet started.
    pub fn new() -> Self {
        Self::shuffle(&mut rand::rng())
    }
    /// A reproducible deal.
    pub fn seeded(seed: u64) -> Self {
        Self::shuffle(&mut SmallRng::seed_from_u64(seed))
    }
    /// Deals from a deck shuffled by `rng`.
    pub fn shuffle<R: Rng>(rng: &mut R) -> Self {
        let (deck, hidden) = Deck::build(rng)
            .inspect_err(|e| log::error!("deck construction failed: {}", e))
            .expect("standard deck holds the reserved card");
        let (seeds, main) = deck.deal(rng);
        debug_assert_eq!(main.len(), MAIN_PILE_SIZE);
        Self::rigged(seeds.map(Pile::from), main, hidden)
    }
    /// A game with an arbitrary layout. Jokers start full, nothing is owed.
    pub fn rigged(
        piles: [Pile; PILES],
        main: impl IntoIterator<Item = Card>,
        hidden: Card,
    ) -> Self {
        Self {
            main: main.into_iter().collect(),
            piles,
            hidden,
            jokers: MAX_JOKERS,
            credits: 0,
            paired: false,
            hot: 0,
            cold: 0,
            stats: Stats::default(),
            status: Status::NotStarted,
            prompt: None,
            ending: None,
        }
    }
    /// A freshly dealt game, already started.
    pub fn root() -> Self {
        Self::new().start().game
    }
    /// Moves a dealt game into play.
    pub fn start(&self) -> Transition {
        if self.status != Status::NotStarted {
            return Transition::rejected(self.clone(), &Illegal::NotPlaying(self.status));
        }
        let mut child = self.clone();
        let mut events = vec![Event::info(format!(
            "New game. Piles show {}. {} cards in the main pile.",
            child
                .piles
                .iter()
                .filter_map(Pile::top)
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            child.main.len()
        ))];
        child.status = Status::Playing;
        child.evaluate(&mut events);
        child.settle(self, events)
    }
    /// Abandons this game for a fresh one.
    ///
    /// Abandoning a game in progress produces a summary for the history.
    pub fn reset(&self) -> Transition {
        let summary = (self.status == Status::Playing)
            .then(|| Summary::from((Ending::Reset, self.main.len())));
        if let Some(summary) = summary {
            log::info!("{}", summary);
        }
        let mut transition = Self::new().start();
        transition.summary = summary;
        transition
    }
}

/// Public state accessors.
impl Game {
    /// Draw pile, next card first.
    pub fn main(&self) -> &VecDeque<Card> {
        &self.main
    }
    pub fn remaining(&self) -> usize {
        self.main.len()
    }
    /// Cards drawn from a full main pile so far.
    pub fn played(&self) -> usize {
        MAIN_PILE_SIZE.saturating_sub(self.main.len())
    }
    pub fn piles(&self) -> &[Pile; PILES] {
        &self.piles
    }
    pub fn pile(&self, index: Position) -> Option<&Pile> {
        self.piles.get(index)
    }
    /// The card to name at the end. Only a display should look at this.
    pub fn hidden(&self) -> Card {
        self.hidden
    }
    pub fn jokers(&self) -> u8 {
        self.jokers
    }
    /// Free placements still owed.
    pub fn credits(&self) -> u8 {
        self.credits
    }
    /// Whether the owed placements came from a King/Queen pair. While
    /// set, a royal placed for free locks its pile.
    pub fn is_paired(&self) -> bool {
        self.paired
    }
    pub fn streak(&self) -> u32 {
        self.hot
    }
    pub fn slump(&self) -> u32 {
        self.cold
    }
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }
    pub fn summary(&self) -> Option<Summary> {
        self.ending.map(|e| Summary::from((e, self.main.len())))
    }
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
    pub fn phase(&self) -> Phase {
        match self.status {
            Status::NotStarted => Phase::Idle,
            Status::Won | Status::Lost => Phase::Over(self.status),
            Status::Playing => match &self.prompt {
                Some(prompt) => Phase::Prompt(prompt.clone()),
                None if self.piles.iter().all(Pile::is_locked) => Phase::Joker,
                None if self.credits > 0 => Phase::Place,
                None => Phase::Guess,
            },
        }
    }
}

/// Legality.
impl Game {
    /// Every action that [`apply`](Self::apply) would accept right now.
    pub fn legal(&self) -> Vec<Action> {
        let mut candidates = Vec::new();
        match &self.prompt {
            Some(Prompt::Royalty(i)) => {
                candidates.extend([Action::Royalty(*i, true), Action::Royalty(*i, false)]);
            }
            Some(Prompt::Trickster(i)) => {
                candidates.extend(Wager::all().into_iter().map(|w| Action::Trickster(*i, w)));
            }
            Some(Prompt::Unlock { candidates: piles, .. }) => {
                candidates.extend(piles.iter().copied().map(Action::Unlock));
            }
            Some(Prompt::FinalGuess) => {
                candidates.extend(Rank::all().into_iter().flat_map(|rank| {
                    std::iter::once(None)
                        .chain(Suit::all().into_iter().map(Some))
                        .map(move |suit| Action::Final(rank, suit))
                }));
            }
            Some(Prompt::JokerRetry) => {
                candidates.extend([Action::Retry, Action::Concede]);
            }
            None => {
                candidates.extend(
                    (0..PILES).flat_map(|i| Direction::all().map(|d| Action::Guess(i, d))),
                );
                candidates.extend((0..PILES).map(Action::Place));
                candidates.extend([Action::Forfeit, Action::Joker]);
            }
        }
        candidates.retain(|a| self.is_allowed(a));
        candidates
    }
    pub fn is_allowed(&self, action: &Action) -> bool {
        self.vet(action).is_ok()
    }
    /// Checks an action against the current state without applying it.
    pub fn vet(&self, action: &Action) -> Result<(), Illegal> {
        if self.status != Status::Playing {
            return Err(Illegal::NotPlaying(self.status));
        }
        match (action, &self.prompt) {
            (Action::Royalty(i, _), Some(Prompt::Royalty(p))) if i == p => Ok(()),
            (Action::Trickster(i, _), Some(Prompt::Trickster(p))) if i == p => Ok(()),
            (Action::Unlock(i), Some(Prompt::Unlock { candidates, .. })) => candidates
                .contains(i)
                .then_some(())
                .ok_or(Illegal::Ineligible(*i)),
            (Action::Final(..), Some(Prompt::FinalGuess)) => Ok(()),
            (Action::Retry, Some(Prompt::JokerRetry)) => match self.jokers {
                0 => Err(Illegal::NoJokers),
                _ => Ok(()),
            },
            (Action::Concede, Some(Prompt::JokerRetry)) => Ok(()),
            (_, Some(prompt)) => Err(Illegal::Pending(prompt.clone())),
            (Action::Guess(i, _), None) => {
                let pile = self.open(*i)?;
                if self.credits > 0 {
                    return Err(Illegal::Owed(self.credits));
                }
                if pile.is_empty() {
                    return Err(Illegal::Empty(*i));
                }
                if self.main.is_empty() {
                    return Err(Illegal::Exhausted);
                }
                Ok(())
            }
            (Action::Place(i), None) => {
                if self.credits == 0 {
                    return Err(Illegal::NoCredits);
                }
                self.open(*i)?;
                if self.main.is_empty() {
                    return Err(Illegal::Exhausted);
                }
                Ok(())
            }
            (Action::Forfeit, None) => match self.credits {
                0 => Err(Illegal::NoCredits),
                _ => Ok(()),
            },
            (Action::Joker, None) => {
                if self.jokers == 0 {
                    return Err(Illegal::NoJokers);
                }
                if !self.piles.iter().any(Pile::is_locked) {
                    return Err(Illegal::NothingLocked);
                }
                Ok(())
            }
            (_, None) => Err(Illegal::Unprompted),
        }
    }
    fn open(&self, index: Position) -> Result<&Pile, Illegal> {
        let pile = self.piles.get(index).ok_or(Illegal::NoSuchPile(index))?;
        match pile.is_locked() {
            true => Err(Illegal::Locked(index)),
            false => Ok(pile),
        }
    }
}

/// State transitions.
impl Game {
    /// Applies an action to a copy of this game.
    ///
    /// Never fails. An illegal action yields a rejected [`Transition`]
    /// carrying this game unchanged and one warning.
    pub fn apply(&self, action: Action) -> Transition {
        if let Err(illegal) = self.vet(&action) {
            log::debug!("rejected {}: {}", action, illegal);
            return Transition::rejected(self.clone(), &illegal);
        }
        log::debug!("{}", action);
        let mut child = self.clone();
        let mut events = Vec::new();
        child.act(action, &mut events);
        child.evaluate(&mut events);
        child.settle(self, events)
    }
    /// Like [`apply`](Self::apply), but an illegal action is an error.
    pub fn try_apply(&self, action: Action) -> anyhow::Result<Transition> {
        self.vet(&action)
            .map_err(|illegal| anyhow::anyhow!("{} not allowed: {}", action, illegal))?;
        Ok(self.apply(action))
    }
    fn settle(self, parent: &Game, events: Vec<Event>) -> Transition {
        for event in events.iter() {
            log::debug!("{:?}: {}", event.kind(), event);
        }
        let summary = match (parent.is_over(), self.is_over()) {
            (false, true) => self.summary(),
            _ => None,
        };
        if let Some(summary) = summary {
            log::info!("{}", summary);
        }
        Transition {
            game: self,
            events,
            accepted: true,
            summary,
        }
    }
}

/// Private mutation methods.
impl Game {
    /// Draws the next card off the main pile.
    fn flip(&mut self) -> Option<Card> {
        self.main.pop_front()
    }
    /// Restarts a pile from the next main pile card, or empty if none is left.
    fn reseed(&mut self, index: Position) {
        let seed = self.flip();
        self.piles[index].reset(seed);
    }
    fn close(&mut self, index: Position) {
        self.piles[index].reset_lock(Lock::Locked);
    }
    fn finish(&mut self, status: Status, ending: Ending) {
        self.status = status;
        self.ending = Some(ending);
        self.prompt = None;
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, pile) in self.piles.iter().enumerate() {
            writeln!(f, "Pile {} {}", i + 1, pile)?;
        }
        write!(
            f,
            "Main {:>2}  Jokers {}  Free {}",
            self.main.len(),
            self.jokers,
            self.credits
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    /// A started game with one card on each pile.
    pub(crate) fn rig(tops: [&str; PILES], main: &[&str], hidden: &str) -> Game {
        let game = Game::rigged(
            tops.map(|s| Pile::from(card(s))),
            main.iter().map(|s| card(s)),
            card(hidden),
        );
        let transition = game.start();
        assert!(transition.accepted);
        transition.game
    }

    fn play(game: &Game, action: Action) -> Game {
        let transition = game.apply(action);
        assert!(transition.accepted, "{} rejected", action);
        transition.game
    }

    #[test]
    fn dealt_game_is_idle_until_started() {
        let game = Game::seeded(42);
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.legal().is_empty());
        assert_eq!(game.remaining(), MAIN_PILE_SIZE);
        assert_eq!(game.jokers(), MAX_JOKERS);
        let game = game.start().game;
        assert_eq!(game.phase(), Phase::Guess);
        assert!(game.piles().iter().all(|p| p.len() == 1 && !p.is_locked()));
        assert!(!game.main().contains(&game.hidden()));
        assert!(!game.start().accepted);
    }

    #[test]
    fn root_is_already_playing() {
        let game = Game::root();
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.phase(), Phase::Guess);
        assert_eq!(game.remaining(), MAIN_PILE_SIZE);
        assert!(!game.legal().is_empty());
    }

    #[test]
    fn seeded_is_reproducible() {
        assert_eq!(Game::seeded(9), Game::seeded(9));
    }

    #[test]
    fn correct_guess_stacks_and_stays_open() {
        let game = rig(["5h", "2d", "9c"], &["7c", "3s"], "4d");
        let transition = game.apply(Action::Guess(0, Direction::Higher));
        assert!(transition.accepted);
        let game = transition.game;
        assert_eq!(game.piles()[0].cards(), &[card("5h"), card("7c")]);
        assert!(!game.piles()[0].is_locked());
        assert_eq!(game.streak(), 1);
        assert_eq!(game.stats().correct(), 1);
        assert_eq!(game.remaining(), 1);
    }

    #[test]
    fn wrong_guess_locks() {
        let game = rig(["5h", "2d", "9c"], &["3s", "7c"], "4d");
        let game = play(&game, Action::Guess(0, Direction::Higher));
        assert!(game.piles()[0].is_locked());
        assert!(!game.piles()[0].is_sealed());
        assert_eq!(game.slump(), 1);
        assert_eq!(game.stats().incorrect(), 1);
        let rejected = game.apply(Action::Guess(0, Direction::Lower));
        assert!(!rejected.accepted);
        assert_eq!(rejected.game, game);
        assert_eq!(rejected.events.len(), 1);
        assert_eq!(rejected.events[0].kind(), Kind::Warning);
    }

    #[test]
    fn tie_is_correct_either_way() {
        for direction in Direction::all() {
            let game = rig(["8h", "2d", "9c"], &["8c", "3s"], "4d");
            let game = play(&game, Action::Guess(0, direction));
            assert!(!game.piles()[0].is_locked());
            assert_eq!(game.stats().correct(), 1);
        }
    }

    #[test]
    fn rejects_out_of_turn() {
        let game = rig(["5h", "2d", "9c"], &["7c", "3s"], "4d");
        assert_eq!(game.vet(&Action::Guess(3, Direction::Higher)), Err(Illegal::NoSuchPile(3)));
        assert_eq!(game.vet(&Action::Place(0)), Err(Illegal::NoCredits));
        assert_eq!(game.vet(&Action::Joker), Err(Illegal::NothingLocked));
        assert_eq!(game.vet(&Action::Retry), Err(Illegal::Unprompted));
        assert!(game.try_apply(Action::Forfeit).is_err());
        assert!(game.try_apply(Action::Guess(1, Direction::Higher)).is_ok());
    }

    #[test]
    fn jack_seals() {
        let game = rig(["5h", "2d", "9c"], &["Jc", "3s"], "4d");
        let game = play(&game, Action::Guess(0, Direction::Higher));
        assert!(game.piles()[0].is_sealed());
        assert_eq!(game.stats().jacks(), 1);
    }

    #[test]
    fn all_sealed_loses_despite_jokers() {
        let mut piles = [
            Pile::from(card("5h")),
            Pile::from(card("2d")),
            Pile::from(card("9c")),
        ];
        piles[0].reset_lock(Lock::Sealed);
        piles[1].reset_lock(Lock::Sealed);
        let game = Game::rigged(piles, [card("Jc"), card("3s")], card("4d")).start().game;
        let transition = game.apply(Action::Guess(2, Direction::Higher));
        assert_eq!(transition.game.status(), Status::Lost);
        assert_eq!(transition.game.ending(), Some(Ending::Sealed));
        assert_eq!(transition.game.jokers(), MAX_JOKERS);
        assert_eq!(
            transition.summary.map(|s| s.to_string()),
            Some("Game Over: Loss - All piles locked by Jacks (Main Pile Left: 1)".to_string())
        );
        assert!(transition.game.legal().is_empty());
    }

    #[test]
    fn all_locked_needs_a_joker() {
        let mut piles = [
            Pile::from(card("5h")),
            Pile::from(card("2d")),
            Pile::from(card("9c")),
        ];
        piles[0].reset_lock(Lock::Locked);
        piles[1].reset_lock(Lock::Sealed);
        let game = Game::rigged(piles, [card("2c"), card("3s"), card("4h"), card("6h")], card("4d"))
            .start()
            .game;
        let game = play(&game, Action::Guess(2, Direction::Higher));
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.phase(), Phase::Joker);
        assert_eq!(game.legal(), vec![Action::Joker]);
        let game = play(&game, Action::Joker);
        assert_eq!(game.jokers(), MAX_JOKERS - 1);
        assert!(game.piles().iter().all(|p| !p.is_locked()));
        assert_eq!(game.piles()[0].cards(), &[card("3s")]);
        assert_eq!(game.piles()[1].cards(), &[card("4h")]);
        assert_eq!(game.piles()[2].cards(), &[card("6h")]);
        assert_eq!(game.remaining(), 0);
    }

    #[test]
    fn all_locked_without_jokers_loses() {
        let mut piles = [
            Pile::from(card("5h")),
            Pile::from(card("2d")),
            Pile::from(card("9c")),
        ];
        piles[0].reset_lock(Lock::Locked);
        piles[1].reset_lock(Lock::Locked);
        let mut game = Game::rigged(piles, [card("2c"), card("3s")], card("4d"));
        game.jokers = 0;
        let transition = game.start().game.apply(Action::Guess(2, Direction::Higher));
        assert_eq!(transition.game.status(), Status::Lost);
        assert_eq!(transition.game.ending(), Some(Ending::Locked));
        assert!(transition.summary.is_some());
    }

    #[test]
    fn empty_main_pile_asks_for_final_guess() {
        let game = rig(["5h", "2d", "9c"], &["7c"], "4d");
        let transition = game.apply(Action::Guess(0, Direction::Higher));
        let game = transition.game;
        assert_eq!(game.prompt(), Some(&Prompt::FinalGuess));
        assert_eq!(game.legal().len(), 13 * 5);
        assert!(transition.events.iter().any(|e| e.kind() == Kind::Warning));
    }

    #[test]
    fn correct_final_rank_wins() {
        let game = rig(["5h", "2d", "9c"], &["7c"], "4d");
        let game = play(&game, Action::Guess(0, Direction::Higher));
        let transition = game.apply(Action::Final(Rank::Four, None));
        assert_eq!(transition.game.status(), Status::Won);
        assert_eq!(
            transition.summary.map(|s| s.to_string()),
            Some("Game Over: Win - Correct final guess (Main Pile Left: 0)".to_string())
        );
    }

    #[test]
    fn perfect_final_guess() {
        let game = rig(["5h", "2d", "9c"], &["7c"], "4d");
        let game = play(&game, Action::Guess(0, Direction::Higher));
        let transition = game.apply(Action::Final(Rank::Four, Some(Suit::D)));
        assert_eq!(transition.game.status(), Status::Won);
        assert!(transition.events.iter().any(|e| e.message().contains("perfect")));
        let transition = game.apply(Action::Final(Rank::Four, Some(Suit::S)));
        assert_eq!(transition.game.status(), Status::Playing);
        assert_eq!(transition.game.prompt(), Some(&Prompt::JokerRetry));
    }

    #[test]
    fn missed_final_guess_spends_jokers_then_loses() {
        let game = rig(["5h", "2d", "9c"], &["7c"], "4d");
        let mut game = play(&game, Action::Guess(0, Direction::Higher));
        for left in (0..MAX_JOKERS).rev() {
            game = play(&game, Action::Final(Rank::King, None));
            assert_eq!(game.prompt(), Some(&Prompt::JokerRetry));
            game = play(&game, Action::Retry);
            assert_eq!(game.jokers(), left);
            assert_eq!(game.prompt(), Some(&Prompt::FinalGuess));
        }
        let transition = game.apply(Action::Final(Rank::King, None));
        assert_eq!(transition.game.status(), Status::Lost);
        assert_eq!(transition.game.ending(), Some(Ending::Missed));
        assert_eq!(transition.game.stats().jokers(), MAX_JOKERS as u32);
    }

    #[test]
    fn conceding_the_retry_loses() {
        let game = rig(["5h", "2d", "9c"], &["7c"], "4d");
        let game = play(&game, Action::Guess(0, Direction::Higher));
        let game = play(&game, Action::Final(Rank::King, None));
        let game = play(&game, Action::Concede);
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.jokers(), MAX_JOKERS);
    }

    #[test]
    fn pending_prompt_blocks_everything_else() {
        let game = rig(["5h", "2d", "9c"], &["10c", "3s", "4s"], "4d");
        let game = play(&game, Action::Guess(0, Direction::Higher));
        assert_eq!(game.prompt(), Some(&Prompt::Trickster(0)));
        assert_eq!(
            game.vet(&Action::Guess(1, Direction::Higher)),
            Err(Illegal::Pending(Prompt::Trickster(0)))
        );
        assert!(!game.is_allowed(&Action::Trickster(1, Wager::default())));
        assert_eq!(game.legal().len(), Wager::all().len());
    }

    #[test]
    fn reset_summarizes_a_game_in_progress() {
        let game = rig(["5h", "2d", "9c"], &["7c", "3s"], "4d");
        let transition = game.reset();
        assert_eq!(transition.game.status(), Status::Playing);
        assert_eq!(transition.game.remaining(), MAIN_PILE_SIZE);
        assert_eq!(
            transition.summary.map(|s| s.to_string()),
            Some("Game Over: Game reset by player (Main Pile Left: 2)".to_string())
        );
        assert!(Game::seeded(1).reset().summary.is_none());
    }

    #[cfg(feature = "client")]
    #[test]
    fn snapshot_survives_json() {
        let game = rig(["5h", "2d", "9c"], &["10c", "3s", "4s"], "4d");
        let game = play(&game, Action::Guess(0, Direction::Higher));
        let json = serde_json::to_string(&game).unwrap();
        let back = serde_json::from_str::<Game>(&json).unwrap();
        assert_eq!(back, game);
        assert_eq!(back.phase(), Phase::Prompt(Prompt::Trickster(0)));
    }

    #[test]
    fn legal_actions_are_all_accepted() {
        for seed in 0..64 {
            let game = Game::seeded(seed).start().game;
            for action in game.legal() {
                assert!(game.apply(action).accepted);
            }
        }
    }
}
