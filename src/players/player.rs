use crate::gameplay::Action;
use crate::gameplay::Event;
use crate::gameplay::Game;

/// Anything that can drive a game forward.
///
/// A [`super::Session`] only asks for a decision while the game is playing,
/// so implementors may assume [`Game::legal`] is non-empty.
pub trait Player {
    fn decide(&mut self, game: &Game) -> Action;
    fn notify(&mut self, _: &Event) {}
}
