use crate::players::Strategy;
use clap::Parser;
use clap::builder::TypedValueParser;

/// Rock, paper, scissors at the terminal. With no flags, both seats are
/// drawn at random from human, reflect and cycle for a three round game.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Rounds per game
    #[arg(long, default_value_t = crate::ROUNDS, value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    pub rounds: usize,
    /// Seed the lineup draws and random players
    #[arg(long)]
    pub seed: Option<u64>,
    /// Pin seat one instead of drawing it
    #[arg(long, value_enum)]
    pub one: Option<Strategy>,
    /// Pin seat two instead of drawing it
    #[arg(long, value_enum)]
    pub two: Option<Strategy>,
    /// Log every decision to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.debug {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        }
    }
}
