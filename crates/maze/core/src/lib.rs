//! Maze model and path search shared by the pursuit bot.
//!
//! `maze-core` owns the static side of a level: the wall layout and teleport
//! chain ([`maze`]), the cell graph built from it once per level ([`graph`]),
//! and the frontier search that routes through that graph while steering
//! around point obstacles ([`search`]). Everything here is pure and
//! synchronous; per-tick decision logic lives in the `pursuit-bot` crate.
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod maze;
pub mod search;

pub use config::BotConfig;
pub use error::{BotFault, ErrorSeverity};
pub use geometry::{Coordinate, Move};
pub use graph::{Cell, CellGraph, CellId};
pub use maze::{Maze, MazeDimensions, MazeError, MazeOracle, Tile};
pub use search::{Path, find_path, find_path_between};
