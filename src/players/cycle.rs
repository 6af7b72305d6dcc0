use super::*;
use crate::console::Console;
use crate::gameplay::Move;

/// Throws the move that would have beaten its own previous throw.
/// The remembered throw starts as rock, so the opener is paper.
#[derive(Debug)]
pub struct Cycle {
    last: Move,
}

impl Default for Cycle {
    fn default() -> Self {
        Self { last: Move::Rock }
    }
}

impl Player for Cycle {
    fn decide(&mut self, console: &mut Console) -> anyhow::Result<Move> {
        announce(console, self.last.successor())
    }
    fn notify(&mut self, own: Move, _: Move) {
        self.last = own;
    }
}
