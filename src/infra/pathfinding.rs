use std::collections::{HashMap, HashSet, VecDeque};

use crate::infra::Position;
use crate::state::BeliefMap;

pub struct Bfs;

impl Bfs {
    /// Shortest path from `start` to `goal` that only steps through cells the
    /// belief map knows to be passable. The goal itself may still be unknown,
    /// which is what lets a brain walk up to the frontier.
    /// The returned path starts with `start` and ends with `goal`.
    pub fn find_path(map: &BeliefMap, start: Position, goal: Position) -> Option<Vec<Position>> {
        if start == goal {
            return Some(vec![goal]);
        }

        let mut queue = VecDeque::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut visited: HashSet<Position> = HashSet::new();

        queue.push_back(start);
        visited.insert(start);

        // The map is finite, but keep a hard bound in case it grows huge.
        const MAX_EXPANSIONS: usize = 20_000;
        let mut expansions = 0;

        while let Some(current) = queue.pop_front() {
            expansions += 1;
            if expansions > MAX_EXPANSIONS {
                return None;
            }

            for neighbor in current.neighbors() {
                if visited.contains(&neighbor) {
                    continue;
                }

                let enterable = neighbor == goal && map.get(&neighbor) != Some(false);
                if !enterable && !map.is_passable(&neighbor) {
                    continue;
                }

                visited.insert(neighbor);
                came_from.insert(neighbor, current);

                if neighbor == goal {
                    return Some(reconstruct_path(&came_from, neighbor));
                }
                queue.push_back(neighbor);
            }
        }

        None
    }
}

fn reconstruct_path(came_from: &HashMap<Position, Position>, mut current: Position) -> Vec<Position> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
