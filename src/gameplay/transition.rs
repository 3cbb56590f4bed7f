use super::ending::Summary;
use super::event::Event;
use super::game::Game;
use super::illegal::Illegal;

/// The result of applying an action: the next state plus what happened
/// on the way there.
///
/// A rejected action hands back the unchanged game and a single warning.
#[derive(Debug, Clone)]
pub struct Transition {
    pub game: Game,
    pub events: Vec<Event>,
    pub accepted: bool,
    /// Set only on the transition that ends the game.
    pub summary: Option<Summary>,
}

impl Transition {
    pub fn rejected(game: Game, illegal: &Illegal) -> Self {
        Self {
            game,
            events: vec![Event::warning(format!("Not allowed: {}.", illegal))],
            accepted: false,
            summary: None,
        }
    }
}
