//! Maze layout loader.
//!
//! Layouts are RON documents with ASCII rows and an optional explicit
//! teleport list, appended after any `T` glyphs found in the rows.

use std::path::Path;

use maze_core::{Coordinate, Maze};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Maze layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MazeDataRon {
    rows: Vec<String>,
    #[serde(default)]
    teleports: Vec<(i32, i32)>, // (row, col)
}

/// Loader for maze layouts from RON files.
pub struct MazeLoader;

impl MazeLoader {
    /// Load a maze layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<Maze> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load maze {}: {}", path.display(), e))
    }

    /// Parse a maze layout from RON text.
    pub fn parse(content: &str) -> LoadResult<Maze> {
        let data: MazeDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse maze RON: {}", e))?;

        let maze = Maze::from_rows(&data.rows)?.with_teleports(
            data.teleports
                .into_iter()
                .map(|(row, col)| Coordinate::new(row, col)),
        );

        Ok(maze)
    }
}
