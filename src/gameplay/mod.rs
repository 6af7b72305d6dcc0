mod game;
mod moves;
mod outcome;
mod phase;
mod round;
mod seat;

pub use game::*;
pub use moves::*;
pub use outcome::*;
pub use phase::*;
pub use round::*;
pub use seat::*;
