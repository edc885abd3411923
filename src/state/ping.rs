use std::collections::HashMap;
use std::fmt;

use tracing::error;

use crate::error::BrainError;
use crate::infra::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Goody,
    Baddy,
}

impl Role {
    pub fn opponent(self) -> Role {
        match self {
            Role::Goody => Role::Baddy,
            Role::Baddy => Role::Goody,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Goody => "goody",
            Role::Baddy => "baddy",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque player handle. Only the role is meaningful to a brain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId {
    pub id: u32,
    pub role: Role,
}

impl PlayerId {
    pub fn new(id: u32, role: Role) -> Self {
        Self { id, role }
    }

    pub fn goody(id: u32) -> Self {
        Self::new(id, Role::Goody)
    }

    pub fn baddy(id: u32) -> Self {
        Self::new(id, Role::Baddy)
    }
}

/// Snapshot of every player's position, delivered after a ping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PingResponse {
    positions: HashMap<PlayerId, Position>,
}

impl PingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player: PlayerId, pos: Position) -> Option<Position> {
        self.positions.insert(player, pos)
    }

    pub fn get(&self, player: &PlayerId) -> Option<Position> {
        self.positions.get(player).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &Position)> {
        self.positions.iter()
    }

    /// The single other player sharing `me`'s role.
    pub fn teammate_of(&self, me: PlayerId) -> Result<(PlayerId, Position), BrainError> {
        self.exactly_one("teammate", me.role, |player| *player != me)
    }

    /// The single player on the other side.
    pub fn opponent_of(&self, me: PlayerId) -> Result<(PlayerId, Position), BrainError> {
        self.exactly_one("opponent", me.role.opponent(), |_| true)
    }

    fn exactly_one<F>(
        &self,
        kind: &'static str,
        role: Role,
        keep: F,
    ) -> Result<(PlayerId, Position), BrainError>
    where
        F: Fn(&PlayerId) -> bool,
    {
        let mut matches = self
            .positions
            .iter()
            .filter(|(player, _)| player.role == role && keep(player));

        match (matches.next(), matches.next()) {
            (Some((player, pos)), None) => Ok((*player, *pos)),
            (first, second) => {
                let found = first.iter().count() + second.iter().count() + matches.count();
                error!("Ping response holds {} {} players, need exactly one {}", found, role, kind);
                Err(BrainError::Cardinality { kind, role, found })
            }
        }
    }
}

impl FromIterator<(PlayerId, Position)> for PingResponse {
    fn from_iter<I: IntoIterator<Item = (PlayerId, Position)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
