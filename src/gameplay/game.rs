use super::*;
use crate::console::Console;
use crate::players::Player;

/// A fixed-length match between two seats.
///
/// Each round asks seat one, then seat two, for a throw, awards at most one
/// point, lets both players learn from the throws and prints the running
/// score. A game is played once; replays build a new one.
#[derive(Debug)]
pub struct Game {
    one: Seat,
    two: Seat,
    rounds: usize,
    history: Vec<Round>,
}

impl Game {
    pub fn new(one: Box<dyn Player>, two: Box<dyn Player>, rounds: usize) -> Self {
        Self {
            one: Seat::from(one),
            two: Seat::from(two),
            rounds,
            history: Vec::with_capacity(rounds),
        }
    }

    pub fn one(&self) -> &Seat {
        &self.one
    }
    pub fn two(&self) -> &Seat {
        &self.two
    }
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        match self.history.len() {
            n if n >= self.rounds => Phase::Finished,
            0 => Phase::NotStarted,
            n => Phase::InProgress(n),
        }
    }

    /// Standing so far. Final once the game is [`Phase::Finished`].
    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.one.score(), self.two.score())
    }

    pub fn scoreboard(&self) -> String {
        format!(
            "Score: Player One: {} Player2: {}",
            self.one.score(),
            self.two.score()
        )
    }

    /// Play every remaining round and announce the result.
    pub fn play(&mut self, console: &mut Console) -> anyhow::Result<Outcome> {
        console.say("Game start!")?;
        while self.phase() != Phase::Finished {
            console.say(format_args!("Round {}:", self.history.len()))?;
            self.round(console)?;
        }
        let outcome = self.outcome();
        log::info!("game over after {} rounds: {:?}", self.history.len(), outcome);
        console.say("Game over!")?;
        console.say(self.scoreboard())?;
        console.say(outcome.game())?;
        Ok(outcome)
    }

    /// Play a single round.
    pub fn round(&mut self, console: &mut Console) -> anyhow::Result<Round> {
        anyhow::ensure!(
            self.phase() != Phase::Finished,
            "all {} rounds already played",
            self.rounds
        );
        log::debug!("{}: asking player one", self.phase());
        let one = self.one.player().decide(console)?;
        log::debug!("asking player two");
        let two = self.two.player().decide(console)?;
        let round = Round { one, two };
        let outcome = round.outcome();
        match outcome {
            Outcome::Tie => {}
            Outcome::One => self.one.win(),
            Outcome::Two => self.two.win(),
        }
        self.one.player().notify(one, two);
        self.two.player().notify(two, one);
        self.history.push(round);
        debug_assert!(self.one.score() + self.two.score() <= self.history.len() as crate::Score);
        console.say(round)?;
        console.say(outcome.round())?;
        console.say(self.scoreboard())?;
        Ok(round)
    }
}
