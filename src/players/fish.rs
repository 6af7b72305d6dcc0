use super::*;
use crate::console::Console;
use crate::gameplay::Move;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CPU player that throws uniformly at random.
/// Carries its own generator so seeded sessions replay identically.
#[derive(Debug)]
pub struct Fish {
    rng: SmallRng,
}

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Player for Fish {
    fn decide(&mut self, console: &mut Console) -> anyhow::Result<Move> {
        let ref mut rng = self.rng;
        announce(console, Move::sample(rng))
    }
    fn notify(&mut self, _: Move, _: Move) {}
}
