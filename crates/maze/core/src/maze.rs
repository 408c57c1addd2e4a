//! Static maze layout served to the bot through [`MazeOracle`].
use std::str::FromStr;

use crate::error::{BotFault, ErrorSeverity};
use crate::geometry::Coordinate;

/// Static maze oracle exposing the immutable layout of one level.
///
/// Hosts may implement this over their own level representation; [`Maze`] is
/// the in-crate implementation used by loaders and tests.
pub trait MazeOracle: Send + Sync {
    fn dimensions(&self) -> MazeDimensions;
    fn tile(&self, coordinate: Coordinate) -> Option<Tile>;

    /// Ordered teleport chain. Entry `i` links one-way to entry `(i + 1) % n`.
    fn teleports(&self) -> &[Coordinate];

    fn contains(&self, coordinate: Coordinate) -> bool {
        self.dimensions().contains(coordinate)
    }

    /// Out-of-bounds coordinates count as walls.
    fn is_wall(&self, coordinate: Coordinate) -> bool {
        !self.is_free(coordinate)
    }

    fn is_free(&self, coordinate: Coordinate) -> bool {
        self.tile(coordinate).is_some_and(Tile::is_free)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl MazeDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row >= 0
            && coordinate.col >= 0
            && coordinate.row < self.rows as i32
            && coordinate.col < self.cols as i32
    }

    pub fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major iteration over every coordinate inside the bounds.
    pub fn coordinates(self) -> impl Iterator<Item = Coordinate> {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Coordinate::new(row, col)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Free,
    Wall,
}

impl Tile {
    pub fn is_free(self) -> bool {
        matches!(self, Tile::Free)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("maze layout has no rows")]
    Empty,

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile character {glyph:?} at {coordinate}")]
    UnknownTile { glyph: char, coordinate: Coordinate },

    #[error("maze of {expected} cells was given {found} tiles")]
    TileCountMismatch { expected: usize, found: usize },
}

impl BotFault for MazeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            MazeError::Empty => "MAZE_EMPTY",
            MazeError::RaggedRow { .. } => "MAZE_RAGGED_ROW",
            MazeError::UnknownTile { .. } => "MAZE_UNKNOWN_TILE",
            MazeError::TileCountMismatch { .. } => "MAZE_TILE_COUNT_MISMATCH",
        }
    }
}

/// Wall layout plus teleport chain for one level.
///
/// Layouts can be written as ASCII rows:
///
/// | glyph | meaning |
/// |-------|---------|
/// | `#` | wall |
/// | `.` ` ` `o` | free |
/// | `T` | free, appended to the teleport chain in row-major order |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    dimensions: MazeDimensions,
    tiles: Vec<Tile>,
    teleports: Vec<Coordinate>,
}

impl Maze {
    pub fn new(
        dimensions: MazeDimensions,
        tiles: Vec<Tile>,
        teleports: Vec<Coordinate>,
    ) -> Result<Self, MazeError> {
        if tiles.len() != dimensions.area() {
            return Err(MazeError::TileCountMismatch {
                expected: dimensions.area(),
                found: tiles.len(),
            });
        }
        Ok(Self {
            dimensions,
            tiles,
            teleports,
        })
    }

    /// Fully open maze without walls or teleports.
    pub fn open(rows: u32, cols: u32) -> Self {
        let dimensions = MazeDimensions::new(rows, cols);
        Self {
            dimensions,
            tiles: vec![Tile::Free; dimensions.area()],
            teleports: Vec::new(),
        }
    }

    /// Parses a layout from ASCII rows.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut teleports = Vec::new();
        let mut width = None;
        let mut height = 0usize;

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let mut found = 0usize;
            for (col, glyph) in line.chars().enumerate() {
                let coordinate = Coordinate::new(row as i32, col as i32);
                let tile = match glyph {
                    '#' => Tile::Wall,
                    '.' | ' ' | 'o' => Tile::Free,
                    'T' => {
                        teleports.push(coordinate);
                        Tile::Free
                    }
                    _ => return Err(MazeError::UnknownTile { glyph, coordinate }),
                };
                tiles.push(tile);
                found += 1;
            }

            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(MazeError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        let width = width.ok_or(MazeError::Empty)?;
        if width == 0 {
            return Err(MazeError::Empty);
        }

        Self::new(
            MazeDimensions::new(height as u32, width as u32),
            tiles,
            teleports,
        )
    }

    /// Appends teleport coordinates after any parsed from `T` glyphs.
    #[must_use]
    pub fn with_teleports(mut self, teleports: impl IntoIterator<Item = Coordinate>) -> Self {
        self.teleports.extend(teleports);
        self
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        self.dimensions.contains(coordinate).then(|| {
            coordinate.row as usize * self.dimensions.cols as usize + coordinate.col as usize
        })
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines())
    }
}

impl MazeOracle for Maze {
    fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    fn tile(&self, coordinate: Coordinate) -> Option<Tile> {
        self.index(coordinate).map(|index| self.tiles[index])
    }

    fn teleports(&self) -> &[Coordinate] {
        &self.teleports
    }
}
