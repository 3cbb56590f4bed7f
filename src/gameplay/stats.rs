/// Special cards and effects counted over a game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Feat {
    Ace,
    Jack,
    Royal,
    Trickster,
    Bloodsurge,
    Joker,
}

/// Running tallies for one game. Counters only ever grow.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    correct: u32,
    incorrect: u32,
    longest: u32,
    aces: u32,
    jacks: u32,
    royals: u32,
    tricksters: u32,
    surges: u32,
    jokers: u32,
    history: Vec<bool>,
}

impl Stats {
    pub fn guesses(&self) -> u32 {
        self.correct + self.incorrect
    }
    pub fn correct(&self) -> u32 {
        self.correct
    }
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }
    /// Longest run of correct guesses.
    pub fn longest(&self) -> u32 {
        self.longest
    }
    pub fn aces(&self) -> u32 {
        self.aces
    }
    pub fn jacks(&self) -> u32 {
        self.jacks
    }
    pub fn royals(&self) -> u32 {
        self.royals
    }
    pub fn tricksters(&self) -> u32 {
        self.tricksters
    }
    pub fn surges(&self) -> u32 {
        self.surges
    }
    pub fn jokers(&self) -> u32 {
        self.jokers
    }
    /// Outcome of every higher/lower guess, oldest first.
    pub fn history(&self) -> &[bool] {
        &self.history
    }
    pub fn accuracy(&self) -> crate::Probability {
        match self.guesses() {
            0 => 0.,
            n => self.correct as crate::Probability / n as crate::Probability,
        }
    }
}

/// Recording
impl Stats {
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        self.history.push(correct);
    }
    pub fn streak(&mut self, streak: u32) {
        self.longest = self.longest.max(streak);
    }
    pub fn tally(&mut self, feat: Feat) {
        match feat {
            Feat::Ace => self.aces += 1,
            Feat::Jack => self.jacks += 1,
            Feat::Royal => self.royals += 1,
            Feat::Trickster => self.tricksters += 1,
            Feat::Bloodsurge => self.surges += 1,
            Feat::Joker => self.jokers += 1,
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}/{} correct, longest streak {}, A{} J{} R{} T{} B{} jokers used {}",
            self.correct,
            self.guesses(),
            self.longest,
            self.aces,
            self.jacks,
            self.royals,
            self.tricksters,
            self.surges,
            self.jokers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_over_recorded_guesses() {
        let mut stats = Stats::default();
        assert_eq!(stats.accuracy(), 0.);
        stats.record(true);
        stats.record(false);
        stats.record(true);
        stats.record(true);
        assert_eq!(stats.guesses(), 4);
        assert_eq!(stats.accuracy(), 0.75);
        assert_eq!(stats.history(), &[true, false, true, true]);
    }
}
