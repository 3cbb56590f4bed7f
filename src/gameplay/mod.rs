//! Game state and the rule engine.
//!
//! [`Game`] is the aggregate root. Everything else here is a value it
//! carries or produces: piles and their locks, the actions a player may
//! take, the prompts the game may raise, and the events and summaries that
//! describe what happened.
mod action;
mod direction;
mod ending;
mod event;
mod game;
mod illegal;
mod journal;
mod lock;
mod phase;
mod pile;
mod prompt;
mod stats;
mod status;
mod transition;
mod wager;

pub use action::*;
pub use direction::*;
pub use ending::*;
pub use event::*;
pub use game::*;
pub use illegal::*;
pub use journal::*;
pub use lock::*;
pub use phase::*;
pub use pile::*;
pub use prompt::*;
pub use stats::*;
pub use status::*;
pub use transition::*;
pub use wager::*;
