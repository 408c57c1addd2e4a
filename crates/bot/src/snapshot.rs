use std::fmt;

use maze_core::{Coordinate, MazeOracle};

/// World state handed to the bot once per tick.
///
/// Pursuer order must be stable across ticks: index `i` always names the
/// same pursuer, otherwise motion estimation pairs up the wrong positions.
pub struct WorldSnapshot<'a> {
    pub agent: Coordinate,
    pub pursuers: Vec<Coordinate>,
    pub maze: &'a dyn MazeOracle,
}

impl<'a> WorldSnapshot<'a> {
    pub fn new(
        maze: &'a dyn MazeOracle,
        agent: Coordinate,
        pursuers: impl Into<Vec<Coordinate>>,
    ) -> Self {
        Self {
            agent,
            pursuers: pursuers.into(),
            maze,
        }
    }
}

impl fmt::Debug for WorldSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldSnapshot")
            .field("agent", &self.agent)
            .field("pursuers", &self.pursuers)
            .field("maze", &self.maze.dimensions())
            .finish()
    }
}
