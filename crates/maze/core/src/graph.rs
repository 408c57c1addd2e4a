//! Cell graph built once per maze.
//!
//! Cells live in a row-major arena and refer to their neighbors by
//! [`CellId`], so the graph can hold cycles (and the one-way teleport chain)
//! without shared ownership. Per-tick data such as safety scores is kept in
//! side tables indexed by [`CellId`] rather than on the cells themselves.
use std::collections::HashMap;

use crate::geometry::{Coordinate, Move};
use crate::maze::{MazeDimensions, MazeOracle};

/// Index of a cell in the [`CellGraph`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub u32);

impl CellId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One traversable grid position and its adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coordinate: Coordinate,
    neighbors: Vec<CellId>,
}

impl Cell {
    fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            neighbors: Vec::new(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }
}

#[derive(Clone, Debug, Default)]
pub struct CellGraph {
    dimensions: Option<MazeDimensions>,
    cells: Vec<Cell>,
    index: HashMap<Coordinate, CellId>,
}

impl CellGraph {
    /// Builds the graph for every free cell of `maze`.
    ///
    /// Cardinal neighbors are registered in [`Move::DIRECTIONS`] order, then
    /// each occurrence of a cell in the teleport chain adds a one-way edge to
    /// the next chain entry. Chain entries that are walls or out of bounds are
    /// skipped.
    pub fn build(maze: &dyn MazeOracle) -> Self {
        let dimensions = maze.dimensions();
        let mut graph = Self {
            dimensions: Some(dimensions),
            cells: Vec::new(),
            index: HashMap::new(),
        };

        for coordinate in dimensions.coordinates() {
            if maze.is_free(coordinate) {
                let id = CellId(graph.cells.len() as u32);
                graph.cells.push(Cell::new(coordinate));
                graph.index.insert(coordinate, id);
            }
        }

        let teleports = maze.teleports();
        for position in 0..graph.cells.len() {
            let coordinate = graph.cells[position].coordinate;
            let mut neighbors: Vec<CellId> = Move::DIRECTIONS
                .iter()
                .filter_map(|&mv| graph.id(coordinate.offset(mv)))
                .collect();

            for (i, teleport) in teleports.iter().enumerate() {
                if *teleport != coordinate {
                    continue;
                }
                let next = teleports[(i + 1) % teleports.len()];
                if let Some(id) = graph.id(next) {
                    neighbors.push(id);
                }
            }

            graph.cells[position].neighbors = neighbors;
        }

        tracing::info!(
            rows = dimensions.rows,
            cols = dimensions.cols,
            cells = graph.cells.len(),
            teleports = teleports.len(),
            "built maze cell graph"
        );

        graph
    }

    /// Dimensions of the maze this graph was built from.
    pub fn dimensions(&self) -> Option<MazeDimensions> {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn id(&self, coordinate: Coordinate) -> Option<CellId> {
        self.index.get(&coordinate).copied()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index.contains_key(&coordinate)
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    pub fn coordinate(&self, id: CellId) -> Option<Coordinate> {
        self.cell(id).map(Cell::coordinate)
    }

    /// Cells in row-major order with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (CellId(i as u32), cell))
    }
}
