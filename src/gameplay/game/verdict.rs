use crate::gameplay::*;

/// End-of-game checks, run once after every accepted action.
impl Game {
    pub(super) fn evaluate(&mut self, events: &mut Vec<Event>) {
        if self.status != Status::Playing {
            return;
        }
        if self.piles.iter().all(Pile::is_sealed) {
            self.finish(Status::Lost, Ending::Sealed);
            events.push(Event::error("Every pile is sealed by a Jack. The game is lost."));
            return;
        }
        if self.piles.iter().all(Pile::is_locked) {
            match self.jokers {
                0 => {
                    self.finish(Status::Lost, Ending::Locked);
                    events.push(Event::error("Every pile is locked and no Jokers remain. The game is lost."));
                }
                n => events.push(Event::warning(format!(
                    "Every pile is locked. Use a Joker to go on ({} left).",
                    n
                ))),
            }
            return;
        }
        if self.main.is_empty() && self.prompt.is_none() {
            if self.credits > 0 {
                events.push(Event::warning(format!(
                    "No cards left to place. {} free placements forfeited.",
                    self.credits
                )));
                self.credits = 0;
                self.paired = false;
            }
            self.prompt = Some(Prompt::FinalGuess);
            events.push(Event::warning(
                "The main pile is empty. Name the hidden card to win.",
            ));
        }
    }
}
