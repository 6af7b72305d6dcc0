use super::*;
use crate::console::Console;
use crate::gameplay::Move;

/// Baseline player that throws rock every round and learns nothing.
/// Never drawn by the random lineup; seat it explicitly.
#[derive(Debug, Default)]
pub struct Fixed;

impl Player for Fixed {
    fn decide(&mut self, console: &mut Console) -> anyhow::Result<Move> {
        announce(console, Move::Rock)
    }
    fn notify(&mut self, _: Move, _: Move) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn always_rock() {
        let ref mut input = Cursor::new("");
        let ref mut output = Vec::new();
        let ref mut console = Console::new(input, output);
        let mut player = Fixed;
        for theirs in Move::ALL {
            assert_eq!(player.decide(console).unwrap(), Move::Rock);
            player.notify(Move::Rock, theirs);
        }
    }
}
