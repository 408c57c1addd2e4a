//! Frontier search over the cell graph.
//!
//! The frontier is ordered by Manhattan distance to the goal alone; travelled
//! cost is not part of the key. This makes the search a greedy best-first
//! walk: optimal on open grids, but detours around obstacles can come out
//! longer than the shortest route. Candidate ranking in the bot is tuned
//! against these path shapes, so the ordering must stay as is.
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::geometry::Coordinate;
use crate::graph::{CellGraph, CellId};

/// Cells from the start (exclusive) to the goal (inclusive), in travel order.
pub type Path = Vec<CellId>;

struct Node {
    cell: CellId,
    parent: Option<usize>,
}

/// Searches from `start` to `goal`, never stepping onto a cell whose
/// coordinate is in `obstacles`.
///
/// Returns an empty path when the goal is unreachable, when either endpoint
/// is not part of the graph, or when `start == goal`. The start cell itself
/// is always expanded even if it is listed as an obstacle.
pub fn find_path(
    graph: &CellGraph,
    start: CellId,
    goal: CellId,
    obstacles: &HashSet<Coordinate>,
) -> Path {
    let (Some(start_cell), Some(goal_cell)) = (graph.cell(start), graph.cell(goal)) else {
        return Path::new();
    };
    let goal_coordinate = goal_cell.coordinate();

    let mut nodes = vec![Node {
        cell: start,
        parent: None,
    }];
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u32;
    frontier.push(Reverse((
        start_cell.coordinate().manhattan(goal_coordinate),
        seq,
        0usize,
    )));
    let mut seen = HashSet::from([start]);

    while let Some(Reverse((_, _, node_idx))) = frontier.pop() {
        let current = nodes[node_idx].cell;
        if current == goal {
            tracing::trace!(expanded = nodes.len(), "search reached goal");
            return trace_back(&nodes, node_idx);
        }

        let Some(cell) = graph.cell(current) else {
            continue;
        };
        for &neighbor in cell.neighbors() {
            let Some(coordinate) = graph.coordinate(neighbor) else {
                continue;
            };
            if obstacles.contains(&coordinate) || !seen.insert(neighbor) {
                continue;
            }

            nodes.push(Node {
                cell: neighbor,
                parent: Some(node_idx),
            });
            seq += 1;
            frontier.push(Reverse((
                coordinate.manhattan(goal_coordinate),
                seq,
                nodes.len() - 1,
            )));
        }
    }

    tracing::trace!(expanded = nodes.len(), "search exhausted frontier");
    Path::new()
}

/// [`find_path`] addressed by coordinates instead of cell ids.
pub fn find_path_between(
    graph: &CellGraph,
    start: Coordinate,
    goal: Coordinate,
    obstacles: &HashSet<Coordinate>,
) -> Path {
    match (graph.id(start), graph.id(goal)) {
        (Some(start), Some(goal)) => find_path(graph, start, goal, obstacles),
        _ => Path::new(),
    }
}

fn trace_back(nodes: &[Node], mut idx: usize) -> Path {
    let mut path = Path::new();
    while let Some(parent) = nodes[idx].parent {
        path.push(nodes[idx].cell);
        idx = parent;
    }
    path.reverse();
    path
}
