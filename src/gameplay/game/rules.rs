use crate::MAX_JOKERS;
use crate::PAIR_CREDITS;
use crate::PILES;
use crate::Position;
use crate::QUEEN_CREDITS;
use crate::ROYALTY_CREDITS;
use crate::SURGE_FLIPS;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::gameplay::*;

/// Rule effects. Every method here runs on a vetted action, so the
/// preconditions checked in [`Game::vet`] hold on entry.
impl Game {
    pub(super) fn act(&mut self, action: Action, events: &mut Vec<Event>) {
        match action {
            Action::Guess(i, direction) => self.guess(i, direction, events),
            Action::Place(i) => self.place(i, events),
            Action::Forfeit => self.forfeit(events),
            Action::Joker => self.joker(events),
            Action::Royalty(i, royal) => self.royalty(i, royal, events),
            Action::Trickster(i, wager) => self.trickster(i, wager, events),
            Action::Unlock(i) => self.unlock(i, events),
            Action::Final(rank, suit) => self.final_guess(rank, suit, events),
            Action::Retry => self.retry(events),
            Action::Concede => self.concede(events),
        }
    }

    fn guess(&mut self, index: Position, direction: Direction, events: &mut Vec<Event>) {
        let (Some(prior), Some(next)) = (self.piles[index].top(), self.flip()) else {
            return;
        };
        let crowned = self.piles[index].has_royalty();
        let diff = next.value() as i8 - prior.value() as i8;
        let correct = direction.admits(diff);
        self.piles[index].push(next);
        self.stats.record(correct);
        events.push(Event::info(format!(
            "Guessed {} than {} on Pile {}. Flipped {}.",
            direction,
            prior,
            index + 1,
            next
        )));
        if !correct {
            self.hot = 0;
            self.cold += 1;
            self.close(index);
            events.push(Event::error(format!("Incorrect! Pile {} locks.", index + 1)));
            return;
        }
        self.cold = 0;
        self.hot += 1;
        self.stats.streak(self.hot);
        events.push(Event::success(format!("Correct! Streak {}.", self.hot)));
        match (next.rank(), prior.rank()) {
            (Rank::Ace, _) => self.ace(index, events),
            (Rank::Jack, _) => self.jack(index, events),
            (Rank::King, Rank::Queen) | (Rank::Queen, Rank::King) => self.pair(events),
            (Rank::Queen, _) => self.queen(events),
            (Rank::King, _) => self.king(index, crowned, events),
            (Rank::Ten, _) => self.ten(index, events),
            (a, b) if a == b => self.surge(index, events),
            _ => {}
        }
    }

    fn ace(&mut self, index: Position, events: &mut Vec<Event>) {
        self.stats.tally(Feat::Ace);
        self.reseed(index);
        match self.piles[index].top() {
            Some(seed) => events.push(Event::success(format!(
                "Ace! Pile {} is discarded and restarts from {}.",
                index + 1,
                seed
            ))),
            None => events.push(Event::warning(format!(
                "Ace! Pile {} is discarded. No card is left to restart it.",
                index + 1
            ))),
        }
    }

    fn jack(&mut self, index: Position, events: &mut Vec<Event>) {
        self.stats.tally(Feat::Jack);
        self.piles[index].reset_lock(Lock::Sealed);
        events.push(Event::error(format!(
            "Jack! Pile {} is sealed until a Joker clears it.",
            index + 1
        )));
    }

    fn pair(&mut self, events: &mut Vec<Event>) {
        self.credits = PAIR_CREDITS;
        self.paired = true;
        events.push(Event::success(format!(
            "King and Queen side by side! {} free placements. A royal placed for free will lock its pile.",
            PAIR_CREDITS
        )));
    }

    fn queen(&mut self, events: &mut Vec<Event>) {
        self.stats.tally(Feat::Royal);
        self.credits = QUEEN_CREDITS;
        self.paired = false;
        events.push(Event::success(format!(
            "Queen! {} free placements.",
            QUEEN_CREDITS
        )));
    }

    fn king(&mut self, index: Position, crowned: bool, events: &mut Vec<Event>) {
        self.stats.tally(Feat::Royal);
        if crowned {
            events.push(Event::info(format!(
                "King joins the royalty already on Pile {}.",
                index + 1
            )));
        } else {
            self.prompt = Some(Prompt::Royalty(index));
            events.push(Event::warning(format!(
                "A lone King on Pile {}. Will the next card be royalty?",
                index + 1
            )));
        }
    }

    fn ten(&mut self, index: Position, events: &mut Vec<Event>) {
        self.stats.tally(Feat::Trickster);
        self.prompt = Some(Prompt::Trickster(index));
        events.push(Event::warning(format!(
            "The Trickster on Pile {} offers a wager on the next card's rank or suit.",
            index + 1
        )));
    }

    fn surge(&mut self, index: Position, events: &mut Vec<Event>) {
        self.stats.tally(Feat::Bloodsurge);
        let draws = (0..SURGE_FLIPS)
            .map_while(|_| self.flip())
            .collect::<Vec<_>>();
        for card in draws.iter().copied() {
            self.piles[index].push(card);
        }
        events.push(Event::warning(format!(
            "Bloodsurge on Pile {}! Flipped {} for free.",
            index + 1,
            draws
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" and ")
        )));
        match draws.as_slice() {
            [a, b] if a.suit() == b.suit() => {
                let candidates = (0..PILES)
                    .filter(|i| self.piles[*i].lock() == Lock::Locked)
                    .collect::<Vec<_>>();
                if candidates.is_empty() {
                    events.push(Event::info("Suits match, but no pile can be unlocked."));
                } else {
                    events.push(Event::success("Suits match! Choose a locked pile to reopen."));
                    self.prompt = Some(Prompt::Unlock {
                        pile: index,
                        candidates,
                    });
                }
            }
            [_, _] => {
                self.close(index);
                events.push(Event::error(format!(
                    "Suits differ. Pile {} locks.",
                    index + 1
                )));
            }
            _ => events.push(Event::info("Too few cards left to finish the Bloodsurge.")),
        }
    }

    fn royalty(&mut self, index: Position, royal: bool, events: &mut Vec<Event>) {
        self.prompt = None;
        let Some(next) = self.flip() else {
            events.push(Event::warning("No card is left to judge the royalty guess."));
            return;
        };
        if royal == next.is_royal() {
            self.credits = ROYALTY_CREDITS;
            self.paired = false;
            events.push(Event::success(format!(
                "Royalty guess correct ({}). {} free placement.",
                next, ROYALTY_CREDITS
            )));
        } else {
            self.close(index);
            events.push(Event::error(format!(
                "Royalty guess wrong ({}). Pile {} locks.",
                next,
                index + 1
            )));
        }
    }

    fn trickster(&mut self, index: Position, wager: Wager, events: &mut Vec<Event>) {
        self.prompt = None;
        let Some(next) = self.flip() else {
            events.push(Event::warning("No card is left for the Trickster to reveal."));
            return;
        };
        events.push(Event::info(format!(
            "The Trickster reveals {}. You wagered {}.",
            next, wager
        )));
        if wager.hits_suit(next) {
            self.reseed(index);
            events.push(Event::success(format!(
                "Suit correct! Pile {} is cleared.",
                index + 1
            )));
        }
        if wager.hits_rank(next) {
            self.jokers = (self.jokers + 1).min(MAX_JOKERS);
            events.push(Event::success(format!(
                "Rank correct! Jokers: {}.",
                self.jokers
            )));
        }
        if wager.misses(next) {
            self.close(index);
            events.push(Event::error(format!(
                "The Trickster wins. Pile {} locks.",
                index + 1
            )));
        }
    }

    fn unlock(&mut self, index: Position, events: &mut Vec<Event>) {
        self.prompt = None;
        self.piles[index].reset_lock(Lock::Open);
        events.push(Event::success(format!("Pile {} reopens.", index + 1)));
    }

    fn place(&mut self, index: Position, events: &mut Vec<Event>) {
        let Some(card) = self.flip() else {
            return;
        };
        self.piles[index].push(card);
        events.push(Event::info(format!(
            "Placed {} on Pile {} for free.",
            card,
            index + 1
        )));
        if self.paired && card.is_royal() {
            self.close(index);
            self.credits = 0;
            self.paired = false;
            events.push(Event::error(format!(
                "Royal {} breaks the pairing. Pile {} locks and the free placements are gone.",
                card,
                index + 1
            )));
            return;
        }
        if card.rank() == Rank::Ace {
            self.ace(index, events);
        }
        self.credits = self.credits.saturating_sub(1);
        if self.credits == 0 {
            self.paired = false;
        }
    }

    fn forfeit(&mut self, events: &mut Vec<Event>) {
        events.push(Event::warning(format!(
            "{} free placements forfeited.",
            self.credits
        )));
        self.credits = 0;
        self.paired = false;
    }

    fn joker(&mut self, events: &mut Vec<Event>) {
        self.jokers -= 1;
        self.stats.tally(Feat::Joker);
        if self.main.len() < PILES {
            events.push(Event::warning("Too few cards left to reseed every pile."));
        }
        for i in 0..PILES {
            self.reseed(i);
        }
        events.push(Event::success(format!(
            "Joker! All piles are cleared and reseeded. Jokers left: {}.",
            self.jokers
        )));
    }

    fn final_guess(&mut self, rank: Rank, suit: Option<Suit>, events: &mut Vec<Event>) {
        self.prompt = None;
        let hit = rank == self.hidden.rank() && suit.is_none_or(|s| s == self.hidden.suit());
        if hit {
            self.finish(Status::Won, Ending::Guessed);
            events.push(Event::success(format!(
                "Victory! The hidden card was {}.",
                self.hidden
            )));
            if suit.is_some() {
                events.push(Event::success("A perfect guess!"));
            }
        } else if self.jokers > 0 {
            self.prompt = Some(Prompt::JokerRetry);
            events.push(Event::warning(format!(
                "Wrong. Spend a Joker for another guess? Jokers: {}.",
                self.jokers
            )));
        } else {
            self.finish(Status::Lost, Ending::Missed);
            events.push(Event::error(format!(
                "Wrong. The hidden card was {}.",
                self.hidden
            )));
        }
    }

    fn retry(&mut self, events: &mut Vec<Event>) {
        self.jokers -= 1;
        self.stats.tally(Feat::Joker);
        self.prompt = Some(Prompt::FinalGuess);
        events.push(Event::info(format!(
            "Joker spent on another final guess. Jokers left: {}.",
            self.jokers
        )));
    }

    fn concede(&mut self, events: &mut Vec<Event>) {
        self.finish(Status::Lost, Ending::Missed);
        events.push(Event::error(format!(
            "Conceded. The hidden card was {}.",
            self.hidden
        )));
    }
}
