//! Safety scoring for cells and candidate paths.
//!
//! A cell's safety value is the summed Manhattan distance to the *estimated*
//! positions of the pursuers that are currently near it. Nearness is judged
//! against the pursuers' *reported* positions. A cell with no nearby pursuer
//! gets [`CellScores::SAFE`], above any reachable sum.
use maze_core::{CellGraph, CellId, Coordinate};

/// Per-tick safety values indexed by [`CellId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellScores {
    values: Vec<u32>,
}

impl CellScores {
    pub const SAFE: u32 = u32::MAX;

    pub fn get(&self, id: CellId) -> Option<u32> {
        self.values.get(id.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max(&self) -> Option<u32> {
        self.values.iter().copied().max()
    }

    /// Cells scoring exactly `value`, in graph order.
    pub fn cells_with(&self, value: u32) -> impl Iterator<Item = CellId> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(move |&(_, &v)| v == value)
            .map(|(i, _)| CellId(i as u32))
    }

    /// Cells sharing the highest value, in graph order.
    pub fn best_cells(&self) -> Vec<CellId> {
        match self.max() {
            Some(max) => self.cells_with(max).collect(),
            None => Vec::new(),
        }
    }
}

/// Scores every cell of `graph`.
///
/// `pursuers` are the reported positions and `estimates` the predicted ones,
/// index-aligned.
pub fn score_cells(
    graph: &CellGraph,
    pursuers: &[Coordinate],
    estimates: &[Coordinate],
    close_distance: u32,
) -> CellScores {
    let values = graph
        .iter()
        .map(|(_, cell)| {
            let at = cell.coordinate();
            let mut nearby = pursuers
                .iter()
                .zip(estimates)
                .filter(|(reported, _)| at.manhattan(**reported) < close_distance)
                .peekable();

            if nearby.peek().is_none() {
                return CellScores::SAFE;
            }
            nearby.fold(0u32, |sum, (_, estimate)| {
                sum.saturating_add(at.manhattan(*estimate))
            })
        })
        .collect();

    CellScores { values }
}

/// Secondary ranking score for a path whose first step is `first_step`.
///
/// Sums distances to the estimated pursuer positions lying strictly within
/// `close_distance` of that step. Zero when none do.
pub fn path_priority(first_step: Coordinate, estimates: &[Coordinate], close_distance: u32) -> u32 {
    estimates
        .iter()
        .map(|estimate| first_step.manhattan(*estimate))
        .filter(|&distance| distance < close_distance)
        .fold(0u32, u32::saturating_add)
}
