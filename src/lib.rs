pub mod brains;
pub mod config;
pub mod error;
pub mod infra;
pub mod protocol;
pub mod state;

// Re-export commonly used types for convenience
pub use brains::{Brain, BrainKind, build_brain};
pub use config::BrainConfig;
pub use error::BrainError;
pub use infra::{Action, Direction, Obstruction, Position};
pub use state::{BeliefMap, PingResponse, PlayerId, Role};
