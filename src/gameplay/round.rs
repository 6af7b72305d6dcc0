use super::Move;
use super::Outcome;

/// The two throws of a finished round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Round {
    pub one: Move,
    pub two: Move,
}

impl Round {
    pub fn outcome(&self) -> Outcome {
        Outcome::from((self.one, self.two))
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player 1: {}  Player 2: {}", self.one, self.two)
    }
}
