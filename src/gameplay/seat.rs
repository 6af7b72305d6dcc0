use crate::Score;
use crate::players::Player;

/// One side of the table: who plays it and how many rounds it has taken.
/// Only the owning [`Game`](super::Game) touches the score.
#[derive(Debug)]
pub struct Seat {
    player: Box<dyn Player>,
    score: Score,
}

impl Seat {
    pub fn score(&self) -> Score {
        self.score
    }
    pub(super) fn player(&mut self) -> &mut dyn Player {
        self.player.as_mut()
    }
    pub(super) fn win(&mut self) {
        self.score += 1;
    }
}

impl From<Box<dyn Player>> for Seat {
    fn from(player: Box<dyn Player>) -> Self {
        Self { player, score: 0 }
    }
}
