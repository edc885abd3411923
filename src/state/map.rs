use std::collections::{HashMap, HashSet};

use crate::infra::{Direction, Obstruction, Position};

/// Agent-private passability knowledge, keyed by position relative to the start cell.
#[derive(Clone, Debug)]
pub struct BeliefMap {
    cells: HashMap<Position, bool>,
}

impl BeliefMap {
    /// A map that only knows the start cell, which is passable.
    pub fn new() -> Self {
        let mut cells = HashMap::new();
        cells.insert(Position::ORIGIN, true);
        Self { cells }
    }

    pub fn get(&self, pos: &Position) -> Option<bool> {
        self.cells.get(pos).copied()
    }

    pub fn insert(&mut self, pos: Position, passable: bool) -> Option<bool> {
        self.cells.insert(pos, passable)
    }

    pub fn is_passable(&self, pos: &Position) -> bool {
        self.get(pos) == Some(true)
    }

    pub fn is_known(&self, pos: &Position) -> bool {
        self.cells.contains_key(pos)
    }

    /// Overwrite the four cells around `at` with what was just sensed.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn record_obstruction(&mut self, at: Position, obstruction: &Obstruction) {
        for direction in Direction::ALL {
            self.insert(at + direction.step(), !obstruction.is_blocked(direction));
        }
    }

    /// Unknown cells that border known passable territory.
    pub fn frontier(&self) -> HashSet<Position> {
        self.cells
            .iter()
            .filter(|(_, passable)| **passable)
            .flat_map(|(pos, _)| pos.neighbors())
            .filter(|pos| !self.is_known(pos))
            .collect()
    }

    /// Frontier cell with the smallest squared distance to `target`.
    /// Ties go to the smaller y, then the smaller x, so the pick is stable.
    pub fn closest_frontier(&self, target: Position) -> Option<Position> {
        self.frontier()
            .into_iter()
            .min_by_key(|pos| (pos.distance_2(&target), pos.y, pos.x))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &bool)> {
        self.cells.iter()
    }
}

impl Default for BeliefMap {
    fn default() -> Self {
        Self::new()
    }
}
