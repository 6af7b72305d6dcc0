//! Back-to-back games at one console.
//!
//! Every game gets a freshly drawn lineup and zeroed scores. After each game
//! the session asks whether to go again, looping rather than recursing so a
//! long evening of replays does not grow the stack.
use crate::console::Console;
use crate::gameplay::Game;
use crate::players::Strategy;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug)]
pub struct Session {
    rng: SmallRng,
    rounds: usize,
    one: Option<Strategy>,
    two: Option<Strategy>,
}

impl Session {
    const REPLAY: &'static str = "Would you like to play again? (y/n)";
    const RESTART: &'static str = "Excellent! Restarting the game...";
    const FAREWELL: &'static str = "Thanks for playing! See you next time.";

    pub fn new(rounds: usize, seed: Option<u64>) -> Self {
        Self {
            rng: seed
                .map(SmallRng::seed_from_u64)
                .unwrap_or_else(SmallRng::from_os_rng),
            rounds,
            one: None,
            two: None,
        }
    }

    /// Pin either seat to a strategy. Unpinned seats are drawn per game.
    pub fn pin(mut self, one: Option<Strategy>, two: Option<Strategy>) -> Self {
        self.one = one;
        self.two = two;
        self
    }

    /// Strategies for the next game, each seat drawn independently.
    pub fn lineup(&mut self) -> (Strategy, Strategy) {
        let ref mut rng = self.rng;
        let one = self.one.unwrap_or_else(|| Strategy::sample(rng));
        let two = self.two.unwrap_or_else(|| Strategy::sample(rng));
        (one, two)
    }

    /// A brand new game with new players.
    pub fn game(&mut self) -> Game {
        let (one, two) = self.lineup();
        log::info!("new game: {} vs {}", one, two);
        Game::new(
            one.player(&mut self.rng),
            two.player(&mut self.rng),
            self.rounds,
        )
    }

    /// Play until the console declines a replay. Returns games played.
    pub fn run(&mut self, console: &mut Console) -> anyhow::Result<usize> {
        let mut games = 0;
        loop {
            self.game().play(console)?;
            games += 1;
            match Self::replay(console)? {
                true => console.say(Self::RESTART)?,
                false => break,
            }
        }
        console.say(Self::FAREWELL)?;
        Ok(games)
    }

    /// Only an exact `y` or `n` gets past this prompt.
    fn replay(console: &mut Console) -> anyhow::Result<bool> {
        loop {
            match console.ask(Self::REPLAY)?.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                other => log::debug!("expected y or n, got {:?}", other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(session: &mut Session, replies: &str) -> (anyhow::Result<usize>, String) {
        let ref mut input = Cursor::new(replies.to_string());
        let ref mut output = Vec::new();
        let games = session.run(&mut Console::new(input, output));
        (games, String::from_utf8_lossy(output).into_owned())
    }

    fn pinned() -> Session {
        Session::new(crate::ROUNDS, Some(1)).pin(Some(Strategy::Cycle), Some(Strategy::Fixed))
    }

    #[test]
    fn no_ends_after_one_game() {
        let (games, output) = run(&mut pinned(), "n\n");
        assert_eq!(games.unwrap(), 1);
        assert_eq!(output.matches("Would you like to play again? (y/n)").count(), 1);
        assert!(output.ends_with("Thanks for playing! See you next time.\n"));
        assert!(!output.contains("Excellent! Restarting the game..."));
    }

    #[test]
    fn yes_starts_fresh_game() {
        let (games, output) = run(&mut pinned(), "y\nn\n");
        assert_eq!(games.unwrap(), 2);
        assert_eq!(output.matches("Game start!").count(), 2);
        assert_eq!(output.matches("Excellent! Restarting the game...").count(), 1);
        // scores restart from zero, so each game reaches exactly the same lines
        assert_eq!(output.matches("Score: Player One: 1 Player2: 0").count(), 2);
        assert_eq!(output.matches("The game is tie.").count(), 2);
    }

    #[test]
    fn anything_else_asks_again() {
        let (games, output) = run(&mut pinned(), "maybe\nY\n\nyes\nn\n");
        assert_eq!(games.unwrap(), 1);
        assert_eq!(output.matches("Would you like to play again? (y/n)").count(), 5);
        assert_eq!(output.matches("Game start!").count(), 1);
    }

    #[test]
    fn padded_answer_asks_again() {
        let (games, output) = run(&mut pinned(), "y \n n\nn\n");
        assert_eq!(games.unwrap(), 1);
        assert_eq!(output.matches("Would you like to play again? (y/n)").count(), 3);
        assert_eq!(output.matches("Game start!").count(), 1);
    }

    #[test]
    fn closed_input_stops_session() {
        let (games, _) = run(&mut pinned(), "maybe\n");
        assert!(games.is_err());
    }

    #[test]
    fn human_seat_reads_console() {
        let mut session =
            Session::new(1, Some(2)).pin(Some(Strategy::Human), Some(Strategy::Fixed));
        let (games, output) = run(&mut session, "paper\nn\n");
        assert_eq!(games.unwrap(), 1);
        assert!(output.contains("You played paper.\n"));
        assert!(output.contains("** PLAYER ONE WINS**"));
    }

    #[test]
    fn drawn_lineups_come_from_pool() {
        let mut session = Session::new(crate::ROUNDS, Some(9));
        for _ in 0..64 {
            let (one, two) = session.lineup();
            assert!(Strategy::SELECTABLE.contains(&one));
            assert!(Strategy::SELECTABLE.contains(&two));
        }
    }

    #[test]
    fn pinning_one_seat_leaves_other_drawn() {
        let mut session = Session::new(crate::ROUNDS, Some(4)).pin(Some(Strategy::Random), None);
        let lineups = (0..64).map(|_| session.lineup()).collect::<Vec<_>>();
        assert!(lineups.iter().all(|(one, _)| *one == Strategy::Random));
        assert!(lineups.iter().any(|(_, two)| *two != lineups[0].1));
    }

    #[test]
    fn same_seed_same_lineups() {
        let mut a = Session::new(crate::ROUNDS, Some(21));
        let mut b = Session::new(crate::ROUNDS, Some(21));
        for _ in 0..16 {
            assert_eq!(a.lineup(), b.lineup());
        }
    }
}
