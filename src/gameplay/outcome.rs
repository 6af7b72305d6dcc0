use super::Move;
use crate::Score;

/// Result of a round or of a whole game, from seat one's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    One,
    Two,
}

impl Outcome {
    /// Strictly higher score wins, equal scores tie.
    pub fn from_scores(one: Score, two: Score) -> Self {
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Self::One,
            std::cmp::Ordering::Less => Self::Two,
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }

    /// Banner printed after a single round.
    pub fn round(&self) -> &'static str {
        match self {
            Self::Tie => "** TIE **",
            Self::One => "** PLAYER ONE WINS**",
            Self::Two => "** PLAYER TWO WINS **",
        }
    }

    /// Banner printed once the game is over.
    pub fn game(&self) -> &'static str {
        match self {
            Self::Tie => "The game is tie.",
            Self::One => "** PLAYER ONE WON THE GAME **",
            Self::Two => "** PLAYER TWO WON THE GAME **",
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((one, two): (Move, Move)) -> Self {
        match (one == two, one.beats(two), two.beats(one)) {
            (true, false, false) => Self::Tie,
            (false, true, false) => Self::One,
            (false, false, true) => Self::Two,
            _ => unreachable!("{} vs {} is neither a tie nor decided", one, two),
        }
    }
}
