//! Move-selection policies for the two seats.
//!
//! ## Implementations
//!
//! - [`Fixed`] — Always throws rock, the baseline case
//! - [`Fish`] — Uniformly random throws
//! - [`Human`] — Reads throws from the console
//! - [`Reflect`] — Repeats the opponent's previous throw
//! - [`Cycle`] — Throws whatever beats its own previous throw
//!
//! [`Strategy`] names each of them and builds boxed instances.
mod cycle;
mod fish;
mod fixed;
mod human;
mod player;
mod reflect;
mod strategy;

pub use cycle::*;
pub use fish::*;
pub use fixed::*;
pub use human::*;
pub use player::*;
pub use reflect::*;
pub use strategy::*;
