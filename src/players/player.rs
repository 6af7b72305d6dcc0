use crate::console::Console;
use crate::gameplay::Move;

/// Anything that can fill a seat at the table.
///
/// The game asks each seat to [`decide`](Player::decide) once per round,
/// seat one first, and then tells both seats what was thrown via
/// [`notify`](Player::notify). Memory a strategy needs between rounds lives
/// in the implementor and is initialized at construction, since `notify`
/// only ever follows the first `decide`.
pub trait Player: std::fmt::Debug {
    /// Pick a move for the upcoming round. Only fails if the console does.
    fn decide(&mut self, console: &mut Console) -> anyhow::Result<Move>;

    /// Observe the round just played from this seat's point of view.
    fn notify(&mut self, own: Move, theirs: Move);
}

/// Computer seats tell the table what they threw.
pub(crate) fn announce(console: &mut Console, choice: Move) -> anyhow::Result<Move> {
    console.say(format_args!("Opponent played {}", choice))?;
    Ok(choice)
}
