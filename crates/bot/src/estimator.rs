//! One-tick-ahead prediction of pursuer positions.
use maze_core::{Coordinate, MazeOracle};

use crate::error::{BotError, Result};

/// Extrapolates pursuers along their last observed displacement.
///
/// With a previous snapshot available, the displacement `current - previous`
/// is scaled by `inertia`, `inertia - 1`, ... down to 1, and the first scaled
/// position that lands on a free tile wins. If none does, the pursuer is
/// assumed to stay put. Without a previous snapshot every pursuer stays put.
#[derive(Clone, Copy)]
pub struct MotionEstimator<'a> {
    maze: &'a dyn MazeOracle,
    previous: Option<&'a [Coordinate]>,
    inertia: u32,
}

impl<'a> MotionEstimator<'a> {
    pub fn new(maze: &'a dyn MazeOracle, previous: Option<&'a [Coordinate]>, inertia: u32) -> Self {
        Self {
            maze,
            previous,
            inertia,
        }
    }

    /// Predicts where pursuer `index`, now at `current`, will be next tick.
    pub fn estimate(&self, current: Coordinate, index: usize) -> Result<Coordinate> {
        let Some(previous) = self.previous else {
            return Ok(current);
        };
        let last = previous
            .get(index)
            .copied()
            .ok_or(BotError::PursuerIndexOutOfRange {
                index,
                previous_len: previous.len(),
            })?;

        // From inside the maze, any shift longer than its longer side lands
        // outside, so larger inertia values behave like this one.
        let dimensions = self.maze.dimensions();
        let reach = self.inertia.min(dimensions.rows.max(dimensions.cols));

        let delta = current.displacement_from(last);
        let estimate = (1..=reach)
            .rev()
            .filter_map(|shift| current.shifted(delta, i32::try_from(shift).ok()?))
            .find(|&candidate| self.maze.is_free(candidate))
            .unwrap_or(current);

        Ok(estimate)
    }

    /// Estimates every pursuer of a snapshot, keeping snapshot order.
    pub fn estimate_all(&self, pursuers: &[Coordinate]) -> Result<Vec<Coordinate>> {
        pursuers
            .iter()
            .enumerate()
            .map(|(index, &current)| self.estimate(current, index))
            .collect()
    }
}
