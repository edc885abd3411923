use thiserror::Error;

use crate::state::Role;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BrainError {
    /// The ping snapshot does not hold exactly one player of the wanted kind.
    /// This is a game configuration fault, not something a brain can recover from.
    #[error("expected exactly one {kind} ({role:?}) in ping response, found {found}")]
    Cardinality {
        kind: &'static str,
        role: Role,
        found: usize,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown brain kind: {0}")]
    UnknownBrain(String),

    #[error("unknown steering mode: {0}")]
    UnknownSteering(String),

    #[error("invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("empty turn line")]
    Empty,

    #[error("obstruction must be four 0/1 characters, got {0:?}")]
    Obstruction(String),

    #[error("expected 'ping' marker, got {0:?}")]
    UnexpectedToken(String),

    #[error("malformed player entry {0:?}, expected <id>:<role>:<x>,<y>")]
    PlayerEntry(String),

    #[error("unknown role {0:?}")]
    Role(String),

    #[error("player {0:?} listed twice in one ping")]
    DuplicatePlayer(String),
}
