//! Turn policies for a maze player.
//!
//! The engine calls [`Brain::take_turn`] once per turn with what the player
//! senses locally and, on turns after a ping, a snapshot of every player's
//! position. Each brain owns its own memory; nothing is shared between players.

mod frontier;
mod greedy;
mod random_walk;
mod stationary;

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::config::BrainConfig;
use crate::error::{BrainError, ConfigError};
use crate::infra::{Action, Direction, Obstruction, Position};
use crate::state::{PingResponse, PlayerId};

pub use frontier::{FrontierBrain, Steering};
pub use greedy::GreedyBrain;
pub use random_walk::RandomWalkBrain;
pub use stationary::StationaryBrain;

/// A pluggable decision policy, invoked once per turn.
pub trait Brain {
    fn name(&self) -> &'static str;

    /// Decide this turn's action. `ping` is only present on turns where a
    /// ping response was delivered.
    fn take_turn(
        &mut self,
        obstruction: &Obstruction,
        ping: Option<&PingResponse>,
    ) -> Result<Action, BrainError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrainKind {
    Stationary,
    RandomWalk,
    Greedy,
    Frontier,
}

impl BrainKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BrainKind::Stationary => "stationary",
            BrainKind::RandomWalk => "random",
            BrainKind::Greedy => "greedy",
            BrainKind::Frontier => "frontier",
        }
    }
}

impl fmt::Display for BrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrainKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stationary" | "static" => Ok(BrainKind::Stationary),
            "random" | "random_walk" => Ok(BrainKind::RandomWalk),
            "greedy" => Ok(BrainKind::Greedy),
            "frontier" => Ok(BrainKind::Frontier),
            _ => Err(ConfigError::UnknownBrain(s.to_string())),
        }
    }
}

/// Build the brain selected by `config` for the player `me`.
pub fn build_brain(config: &BrainConfig, me: PlayerId) -> Box<dyn Brain> {
    match config.kind {
        BrainKind::Stationary => Box::new(StationaryBrain),
        BrainKind::RandomWalk => match config.seed {
            Some(seed) => Box::new(RandomWalkBrain::seeded(seed)),
            None => Box::new(RandomWalkBrain::new()),
        },
        BrainKind::Greedy => Box::new(GreedyBrain::new(me)),
        BrainKind::Frontier => Box::new(FrontierBrain::new(
            me,
            config.ping_staleness,
            config.steering,
        )),
    }
}

/// Open directions paired with the squared length of `other - step`, best first.
/// The sort is stable, so equal lengths keep the `Direction::ALL` order.
pub fn ranked_moves(obstruction: &Obstruction, other: Position) -> Vec<(Direction, i64)> {
    let mut ranked: Vec<(Direction, i64)> = obstruction
        .open_directions()
        .map(|direction| (direction, other.distance_2(&direction.step())))
        .collect();
    ranked.sort_by_key(|(_, len_2)| *len_2);
    ranked
}

/// Greedy step that most shrinks the displacement to `other`.
/// Boxed in on all four sides, the only safe answer is to stay put.
pub fn step_towards(obstruction: &Obstruction, other: Position) -> Action {
    match ranked_moves(obstruction, other).first() {
        Some((direction, _)) => Action::Move(*direction),
        None => {
            warn!("No unobstructed direction, staying in place");
            Action::Stay
        }
    }
}
