use super::player::Player;
use crate::MULLIGAN_WINDOW;
use crate::gameplay::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Drives one game to the end with a single [`Player`].
///
/// Events from every transition are handed to the player and kept in a
/// [`Journal`]. With mulligans on, a player reaching for a Joker within
/// the first [`MULLIGAN_WINDOW`] cards gets a fresh deal instead.
pub struct Session<P: Player> {
    player: P,
    game: Game,
    journal: Journal,
    rng: SmallRng,
    mulligan: bool,
    mulligans: usize,
}

impl<P: Player> Session<P> {
    pub fn new(player: P) -> Self {
        Self::dealt(player, SmallRng::from_rng(&mut rand::rng()))
    }
    /// Deals every game, including any mulligan, from `seed`.
    pub fn seeded(player: P, seed: u64) -> Self {
        Self::dealt(player, SmallRng::seed_from_u64(seed))
    }
    fn dealt(player: P, mut rng: SmallRng) -> Self {
        Self {
            game: Game::shuffle(&mut rng),
            player,
            journal: Journal::default(),
            rng,
            mulligan: false,
            mulligans: 0,
        }
    }
    pub fn mulligan(mut self, enabled: bool) -> Self {
        self.mulligan = enabled;
        self
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn journal(&self) -> &Journal {
        &self.journal
    }
    /// Fresh deals taken so far.
    pub fn mulligans(&self) -> usize {
        self.mulligans
    }

    /// Plays until the game ends.
    ///
    /// Fails if the player picks an action the game turns away.
    pub fn run(&mut self) -> anyhow::Result<Summary> {
        loop {
            match self.game.phase() {
                Phase::Idle => {
                    let transition = self.game.start();
                    self.record(transition)?;
                }
                Phase::Over(_) => {
                    return self
                        .game
                        .summary()
                        .ok_or_else(|| anyhow::anyhow!("finished game without an ending"));
                }
                _ => {
                    let action = self.player.decide(&self.game);
                    if self.mulligan
                        && action == Action::Joker
                        && self.game.played() < MULLIGAN_WINDOW
                    {
                        self.redeal();
                        continue;
                    }
                    let transition = self.game.apply(action);
                    anyhow::ensure!(
                        transition.accepted,
                        "{} turned away in phase {}",
                        action,
                        self.game.phase()
                    );
                    self.record(transition)?;
                }
            }
        }
    }

    fn record(&mut self, transition: Transition) -> anyhow::Result<()> {
        anyhow::ensure!(transition.accepted, "transition turned away");
        for event in transition.events.iter() {
            self.player.notify(event);
        }
        self.journal.record(transition.events);
        self.game = transition.game;
        Ok(())
    }

    fn redeal(&mut self) {
        self.mulligans += 1;
        let event = Event::warning(format!(
            "Mulligan after {} cards. Dealing a fresh game.",
            self.game.played()
        ));
        log::info!("{}", event);
        self.player.notify(&event);
        self.journal.record([event]);
        self.game = Game::shuffle(&mut self.rng);
    }
}
