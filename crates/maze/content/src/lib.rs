//! Data-driven maze content and loaders.
//!
//! This crate reads level and bot data files for hosts and tests:
//! - Maze layouts (data-driven via RON)
//! - Bot tuning parameters (data-driven via TOML)
//!
//! Loaders produce `maze-core` types directly; the decision engine never
//! touches the filesystem itself.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MazeLoader};
