//! Bloodjack: a single-player higher-or-lower card game.
//!
//! The crate is a pure rule engine. A [`gameplay::Game`] is an immutable
//! snapshot; every player decision is an [`gameplay::Action`] applied through
//! [`gameplay::Game::apply`], which yields the next snapshot together with the
//! events that describe what happened. Presentation, persistence and pacing
//! live outside the crate and consume those outputs.
//!
//! ## Modules
//!
//! - [`cards`] — ranks, suits, cards and deck construction
//! - [`gameplay`] — game state, rules, prompts and the game-over evaluator
//! - [`players`] — the heuristic [`players::Robot`] and the autoplay [`players::Session`]
pub mod cards;
pub mod gameplay;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Certainty of a guess, as estimated by the autoplay policy.
pub type Probability = f32;
/// Index of one of the three play piles.
pub type Position = usize;

// ============================================================================
// RULE PARAMETERS
// ============================================================================
/// Number of play piles on the table.
pub const PILES: usize = 3;
/// Jokers held at the start of a game, and the most ever held.
pub const MAX_JOKERS: u8 = 2;
/// Free placements granted by a lone Queen.
pub const QUEEN_CREDITS: u8 = 2;
/// Free placements granted by an adjacent King and Queen.
pub const PAIR_CREDITS: u8 = 5;
/// Free placements granted by a correct royalty guess.
pub const ROYALTY_CREDITS: u8 = 1;
/// Extra cards flipped onto a pile by a Bloodsurge.
pub const SURGE_FLIPS: usize = 2;
/// Cards left in the main pile right after the deal.
pub const MAIN_PILE_SIZE: usize = 46;

// ============================================================================
// AUTOPLAY PARAMETERS
// ============================================================================
/// Natural share of royalty (Queens and Kings) in a full deck.
pub const ROYALTY_BASELINE: Probability = 8.0 / 52.0;
/// Main-pile cards played before which a turbo autoplay restarts instead of spending a joker.
pub const MULLIGAN_WINDOW: usize = 10;
/// Number of events a [`gameplay::Journal`] retains.
pub const JOURNAL_CAPACITY: usize = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
