//! Rock, paper, scissors between two seats, each filled by a human at the
//! console or by one of a handful of simple strategies.
//!
//! - [`gameplay`] holds the move domain and the round/game scoring loop
//! - [`players`] holds the move-selection policies behind [`players::Player`]
//! - [`session`] runs games back to back and offers the replay
//! - [`console`] is the only I/O boundary
pub mod console;
pub mod gameplay;
pub mod players;
pub mod session;

#[cfg(feature = "cli")]
mod args;
#[cfg(feature = "cli")]
pub use args::*;

/// Points awarded over a game. One per decisive round.
pub type Score = u32;

/// Rounds played per game unless overridden on the command line.
pub const ROUNDS: usize = 3;

/// Initialize terminal logging on stderr so stdout carries only the game
/// transcript.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
