//! Players and the loop that drives a game with one.
//!
//! - [`Robot`] — the heuristic autoplay policy
//! - [`Fish`] — uniformly random legal moves, for sweeps and fuzzing
//! - [`Human`] — terminal input (requires `cli` feature)
//! - [`Session`] — plays a game to the end, with optional mulligans
mod fish;
#[cfg(feature = "cli")]
mod human;
mod player;
mod robot;
mod session;

pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use player::*;
pub use robot::*;
pub use session::*;
