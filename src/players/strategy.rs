use super::*;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Names every kind of seat, so lineups can be drawn at random or pinned
/// from the command line.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Strategy {
    Fixed,
    Random,
    Human,
    Reflect,
    Cycle,
}

impl Strategy {
    /// Pool for a freshly drawn lineup. Fixed and Random are left out.
    pub const SELECTABLE: [Self; 3] = [Self::Human, Self::Reflect, Self::Cycle];

    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::SELECTABLE
            .choose(rng)
            .copied()
            .expect("non empty strategy pool")
    }

    /// Build a fresh player. Random seats derive their own seed from `rng`.
    pub fn player<R: Rng + ?Sized>(self, rng: &mut R) -> Box<dyn Player> {
        match self {
            Self::Fixed => Box::new(Fixed),
            Self::Random => Box::new(Fish::seeded(rng.random())),
            Self::Human => Box::new(Human),
            Self::Reflect => Box::new(Reflect::default()),
            Self::Cycle => Box::new(Cycle::default()),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
