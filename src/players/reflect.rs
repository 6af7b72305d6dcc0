use super::*;
use crate::console::Console;
use crate::gameplay::Move;

/// Throws back whatever the opponent threw last round.
/// Opens with rock, having seen nothing yet.
#[derive(Debug)]
pub struct Reflect {
    last: Move,
}

impl Default for Reflect {
    fn default() -> Self {
        Self { last: Move::Rock }
    }
}

impl Player for Reflect {
    fn decide(&mut self, console: &mut Console) -> anyhow::Result<Move> {
        log::debug!("reflect mirrors {}", self.last);
        announce(console, self.last)
    }
    fn notify(&mut self, _: Move, theirs: Move) {
        log::debug!("reflect learned {}", theirs);
        self.last = theirs;
    }
}
