use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::brains::{Brain, step_towards};
use crate::error::{BrainError, ConfigError};
use crate::infra::{Action, Bfs, Obstruction, Position, path_to_direction};
use crate::state::{BeliefMap, PingResponse, PlayerId};

/// How the frontier brain turns its knowledge into a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steering {
    /// Step toward the teammate, same as the greedy brain.
    #[default]
    Greedy,
    /// Walk the belief map toward the unexplored cell nearest the meeting point.
    Frontier,
}

impl fmt::Display for Steering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Steering::Greedy => f.write_str("greedy"),
            Steering::Frontier => f.write_str("frontier"),
        }
    }
}

impl FromStr for Steering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Steering::Greedy),
            "frontier" => Ok(Steering::Frontier),
            _ => Err(ConfigError::UnknownSteering(s.to_string())),
        }
    }
}

/// Builds a belief map of the maze from local sensing and re-pings once
/// its positional knowledge gets older than `ping_staleness` turns.
///
/// Positions in the belief map are relative to the start cell. The brain
/// dead-reckons its own position, assuming every move it returns succeeds;
/// moves are only ever chosen among directions sensed open this turn.
/// If the engine rejects a move anyway, later sensing lands on the wrong
/// cells and `Steering::Frontier` degrades; greedy steering is unaffected.
pub struct FrontierBrain {
    me: PlayerId,
    ping_staleness: u32,
    steering: Steering,
    position: Position,
    knowledge: BeliefMap,
    last_ping: Option<PingResponse>,
    /// Own position at the time the last ping arrived.
    ping_origin: Position,
    turns_since_ping: Option<u32>,
}

impl FrontierBrain {
    pub fn new(me: PlayerId, ping_staleness: u32, steering: Steering) -> Self {
        Self {
            me,
            ping_staleness,
            steering,
            position: Position::ORIGIN,
            knowledge: BeliefMap::new(),
            last_ping: None,
            ping_origin: Position::ORIGIN,
            turns_since_ping: None,
        }
    }

    pub fn knowledge(&self) -> &BeliefMap {
        &self.knowledge
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn turns_since_ping(&self) -> Option<u32> {
        self.turns_since_ping
    }

    fn needs_ping(&self) -> bool {
        match self.turns_since_ping {
            None => true,
            Some(turns) => turns > self.ping_staleness,
        }
    }

    /// Halfway to the teammate, in belief-map coordinates.
    fn meeting_point(&self, friend: Position) -> Position {
        self.ping_origin + friend.halved()
    }

    fn steer_to_frontier(&self, target: Position) -> Option<Action> {
        let frontier = self.knowledge.closest_frontier(target)?;
        let path = Bfs::find_path(&self.knowledge, self.position, frontier)?;
        debug!(
            "Frontier {} is {} steps away (target {})",
            frontier,
            path.len() - 1,
            target
        );
        path_to_direction(self.position, &path).map(Action::Move)
    }
}

impl Brain for FrontierBrain {
    fn name(&self) -> &'static str {
        "frontier"
    }

    #[tracing::instrument(level = "debug", skip_all, fields(player = self.me.id))]
    fn take_turn(
        &mut self,
        obstruction: &Obstruction,
        ping: Option<&PingResponse>,
    ) -> Result<Action, BrainError> {
        self.knowledge.record_obstruction(self.position, obstruction);

        match ping {
            Some(ping) => {
                self.last_ping = Some(ping.clone());
                self.ping_origin = self.position;
                self.turns_since_ping = Some(0);
            }
            None => {
                if let Some(turns) = self.turns_since_ping.as_mut() {
                    *turns = turns.saturating_add(1);
                }
            }
        }

        if self.needs_ping() {
            info!(
                "Pinging to find our friend and foe (turns since ping: {:?})",
                self.turns_since_ping
            );
            return Ok(Action::Ping);
        }
        let Some(last_ping) = &self.last_ping else {
            return Ok(Action::Ping);
        };

        let (_, friend) = last_ping.teammate_of(self.me)?;
        let (_, foe) = last_ping.opponent_of(self.me)?;
        let target = self.meeting_point(friend);
        debug!(
            "Friend at {}, foe at {}, meeting point {}, {} cells known",
            friend,
            foe,
            target,
            self.knowledge.len()
        );

        let action = match self.steering {
            Steering::Greedy => step_towards(obstruction, friend),
            Steering::Frontier => self
                .steer_to_frontier(target)
                .unwrap_or_else(|| step_towards(obstruction, friend)),
        };

        if let Action::Move(direction) = action {
            self.position = self.position + direction.step();
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Direction;

    fn ping_with_friend_at(pos: Position) -> PingResponse {
        PingResponse::from_iter([
            (PlayerId::goody(0), Position::new(0, 0)),
            (PlayerId::goody(1), pos),
            (PlayerId::baddy(2), Position::new(7, -7)),
        ])
    }

    #[test]
    fn test_first_turn_without_ping_pings() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 30, Steering::Greedy);
        assert_eq!(brain.take_turn(&Obstruction::clear(), None), Ok(Action::Ping));
        assert_eq!(brain.turns_since_ping(), None);
    }

    #[test]
    fn test_sensing_overwrites_belief_map() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 30, Steering::Greedy);
        brain.take_turn(&Obstruction::blocked_all(), None).unwrap();
        brain
            .take_turn(&Obstruction::with_blocked(&[Direction::Up]), None)
            .unwrap();

        let knowledge = brain.knowledge();
        assert_eq!(knowledge.get(&Position::new(0, -1)), Some(false));
        assert_eq!(knowledge.get(&Position::new(0, 1)), Some(true));
        assert_eq!(knowledge.get(&Position::new(-1, 0)), Some(true));
        assert_eq!(knowledge.get(&Position::new(1, 0)), Some(true));
        assert_eq!(knowledge.get(&Position::ORIGIN), Some(true));
    }

    #[test]
    fn test_repings_once_knowledge_is_stale() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 2, Steering::Greedy);
        let ping = ping_with_friend_at(Position::new(6, 0));

        assert_eq!(
            brain.take_turn(&Obstruction::clear(), Some(&ping)),
            Ok(Action::Move(Direction::Right))
        );
        assert_eq!(brain.turns_since_ping(), Some(0));
        for _ in 0..2 {
            assert!(matches!(
                brain.take_turn(&Obstruction::clear(), None),
                Ok(Action::Move(_))
            ));
        }
        assert_eq!(brain.turns_since_ping(), Some(2));

        // Counter now exceeds the threshold; obstruction does not matter.
        assert_eq!(brain.take_turn(&Obstruction::clear(), None), Ok(Action::Ping));
        assert_eq!(
            brain.take_turn(&Obstruction::blocked_all(), None),
            Ok(Action::Ping)
        );

        // A fresh response resets the counter and movement resumes.
        assert!(matches!(
            brain.take_turn(&Obstruction::clear(), Some(&ping)),
            Ok(Action::Move(_))
        ));
        assert_eq!(brain.turns_since_ping(), Some(0));
    }

    #[test]
    fn test_greedy_steering_dead_reckons_position() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 30, Steering::Greedy);
        let ping = ping_with_friend_at(Position::new(0, 5));

        brain.take_turn(&Obstruction::clear(), Some(&ping)).unwrap();
        brain.take_turn(&Obstruction::clear(), None).unwrap();
        assert_eq!(brain.position(), Position::new(0, 2));

        // Sensing happens around the dead-reckoned cell.
        brain
            .take_turn(&Obstruction::with_blocked(&[Direction::Down]), None)
            .unwrap();
        assert_eq!(brain.knowledge().get(&Position::new(0, 3)), Some(false));
    }

    #[test]
    fn test_greedy_steering_ignores_meeting_point() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 30, Steering::Greedy);
        // Meeting point is (2, 0); the friend stays at (5, 1).
        let ping = ping_with_friend_at(Position::new(5, 1));
        assert_eq!(
            brain.take_turn(&Obstruction::clear(), Some(&ping)),
            Ok(Action::Move(Direction::Right))
        );

        for _ in 0..4 {
            assert_eq!(
                brain.take_turn(&Obstruction::clear(), None),
                Ok(Action::Move(Direction::Right))
            );
        }

        // Past the meeting point, steering by it would have turned LEFT.
        assert_eq!(brain.position(), Position::new(5, 0));
    }

    #[test]
    fn test_unanswered_pings_keep_counting() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 0, Steering::Greedy);
        let ping = ping_with_friend_at(Position::new(2, 0));
        brain.take_turn(&Obstruction::clear(), Some(&ping)).unwrap();
        brain.turns_since_ping = Some(u32::MAX - 1);

        for _ in 0..3 {
            assert_eq!(brain.take_turn(&Obstruction::clear(), None), Ok(Action::Ping));
        }
        assert_eq!(brain.turns_since_ping(), Some(u32::MAX));
    }

    #[test]
    fn test_boxed_in_stays_put() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 30, Steering::Frontier);
        let ping = ping_with_friend_at(Position::new(4, 4));
        assert_eq!(
            brain.take_turn(&Obstruction::blocked_all(), Some(&ping)),
            Ok(Action::Stay)
        );
        assert_eq!(brain.position(), Position::ORIGIN);
    }

    #[test]
    fn test_frontier_steering_walks_around_wall() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 30, Steering::Frontier);
        // Meeting point is (4, 0), straight through a wall on the right.
        let ping = ping_with_friend_at(Position::new(8, 0));
        let action = brain
            .take_turn(&Obstruction::with_blocked(&[Direction::Right]), Some(&ping))
            .unwrap();

        // Closest frontier cells to (4, 0) are (1, -1) and (1, 1); the stable
        // tie-break picks the smaller y, reached by going up first.
        assert_eq!(action, Action::Move(Direction::Up));
        assert_eq!(brain.position(), Position::new(0, -1));
    }

    #[test]
    fn test_missing_teammate_is_fatal() {
        let mut brain = FrontierBrain::new(PlayerId::goody(0), 30, Steering::Greedy);
        let ping = PingResponse::from_iter([
            (PlayerId::goody(0), Position::new(0, 0)),
            (PlayerId::baddy(2), Position::new(1, 1)),
        ]);
        assert!(matches!(
            brain.take_turn(&Obstruction::clear(), Some(&ping)),
            Err(BrainError::Cardinality { kind: "teammate", .. })
        ));
    }

    #[test]
    fn test_steering_parsing() {
        assert_eq!("frontier".parse::<Steering>(), Ok(Steering::Frontier));
        assert_eq!("GREEDY".parse::<Steering>(), Ok(Steering::Greedy));
        assert!("astar".parse::<Steering>().is_err());
    }
}
