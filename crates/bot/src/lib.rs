//! Flee decisions for an agent chased through a grid maze.
//!
//! Each tick the host hands [`BotPlayer::step`] a [`WorldSnapshot`] and gets
//! one [`maze_core::Move`] back. Internally a tick runs four stages:
//!
//! 1. **Estimation** ([`estimator`]): extrapolate every pursuer one tick ahead
//!    from its last displacement, never into a wall
//! 2. **Scoring** ([`scorer`]): rate every cell by summed distance to the
//!    estimated positions of nearby pursuers
//! 3. **Planning** ([`policy`]): route to each best-rated cell around the
//!    pursuers and rank the routes
//! 4. **Tracing** ([`tracer`]): report the chosen move to an observer
//!
//! Failures never escape `step`; they are logged and turned into
//! [`maze_core::Move::Stay`]. Use [`BotPlayer::try_step`] to see them.

pub mod error;
pub mod estimator;
pub mod policy;
pub mod scorer;
pub mod snapshot;
pub mod tracer;

pub use error::{BotError, Result};
pub use estimator::MotionEstimator;
pub use policy::BotPlayer;
pub use scorer::{CellScores, path_priority, score_cells};
pub use snapshot::WorldSnapshot;
pub use tracer::{HistoryTracer, LogTracer, NoopTracer, TraceEntry, Tracer};
