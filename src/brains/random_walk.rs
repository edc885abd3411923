use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::trace;

use crate::brains::Brain;
use crate::error::BrainError;
use crate::infra::{Action, Obstruction};
use crate::state::PingResponse;

/// Picks uniformly among the open directions and a ping. Ignores ping data.
pub struct RandomWalkBrain<R = StdRng> {
    rng: R,
}

impl RandomWalkBrain<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomWalkBrain<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: rand::Rng> RandomWalkBrain<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: rand::Rng> Brain for RandomWalkBrain<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn take_turn(
        &mut self,
        obstruction: &Obstruction,
        _ping: Option<&PingResponse>,
    ) -> Result<Action, BrainError> {
        let mut possibilities = vec![Action::Ping];
        possibilities.extend(obstruction.open_directions().map(Action::Move));

        // Ping is always on the list, so there is always something to choose.
        let action = possibilities
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::Ping);
        trace!("Random walk picked {} from {} options", action, possibilities.len());
        Ok(action)
    }
}
