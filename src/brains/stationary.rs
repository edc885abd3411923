use crate::brains::Brain;
use crate::error::BrainError;
use crate::infra::{Action, Obstruction};
use crate::state::PingResponse;

/// Never leaves its start cell.
pub struct StationaryBrain;

impl Brain for StationaryBrain {
    fn name(&self) -> &'static str {
        "stationary"
    }

    fn take_turn(
        &mut self,
        _obstruction: &Obstruction,
        _ping: Option<&PingResponse>,
    ) -> Result<Action, BrainError> {
        Ok(Action::Stay)
    }
}
