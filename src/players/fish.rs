use super::player::Player;
use crate::gameplay::Action;
use crate::gameplay::Game;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Chooses uniformly among legal actions.
pub struct Fish(SmallRng);

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Player for Fish {
    fn decide(&mut self, game: &Game) -> Action {
        game.legal()
            .choose(&mut self.0)
            .copied()
            .expect("non empty legal actions conditional on being asked to move")
    }
}
