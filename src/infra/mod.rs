mod pathfinding;
mod types;

pub use pathfinding::Bfs;
pub use types::{Action, Direction, Obstruction, Position};

// ============================================================================
// Helper functions
// ============================================================================

/// Direction of the first step along `path`, which must start at `current`.
pub fn path_to_direction(current: Position, path: &[Position]) -> Option<Direction> {
    if path.len() < 2 {
        return None;
    }
    let next = path[1];

    Direction::ALL
        .into_iter()
        .find(|direction| current + direction.step() == next)
}
