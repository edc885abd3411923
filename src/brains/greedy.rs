use tracing::{debug, info};

use crate::brains::{Brain, step_towards};
use crate::error::BrainError;
use crate::infra::{Action, Obstruction};
use crate::state::{PingResponse, PlayerId};

/// Pings once, then keeps stepping toward the teammate's last known position.
pub struct GreedyBrain {
    me: PlayerId,
    last_ping: Option<PingResponse>,
}

impl GreedyBrain {
    pub fn new(me: PlayerId) -> Self {
        Self {
            me,
            last_ping: None,
        }
    }

    pub fn last_ping(&self) -> Option<&PingResponse> {
        self.last_ping.as_ref()
    }
}

impl Brain for GreedyBrain {
    fn name(&self) -> &'static str {
        "greedy"
    }

    #[tracing::instrument(level = "debug", skip_all, fields(player = self.me.id))]
    fn take_turn(
        &mut self,
        obstruction: &Obstruction,
        ping: Option<&PingResponse>,
    ) -> Result<Action, BrainError> {
        if let Some(ping) = ping {
            self.last_ping = Some(ping.clone());
        }

        let Some(last_ping) = &self.last_ping else {
            info!("Pinging to find our friend and foe");
            return Ok(Action::Ping);
        };

        let (_, friend) = last_ping.teammate_of(self.me)?;
        let (_, foe) = last_ping.opponent_of(self.me)?;
        debug!("Last known friend at {}, foe at {}", friend, foe);

        Ok(step_towards(obstruction, friend))
    }
}
