//! Errors raised while computing a tick.
//!
//! Unreachable goals and coordinates missing from the graph are not errors;
//! they produce empty paths and the policy falls back to the next option.
use maze_core::{BotFault, ErrorSeverity, MazeDimensions};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BotError {
    #[error("pursuer {index} has no entry in the previous snapshot ({previous_len} pursuers)")]
    PursuerIndexOutOfRange { index: usize, previous_len: usize },

    #[error("maze is {found:?} but the cached graph was built for {expected:?}")]
    MazeChanged {
        expected: MazeDimensions,
        found: MazeDimensions,
    },
}

impl BotFault for BotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BotError::PursuerIndexOutOfRange { .. } => ErrorSeverity::Recoverable,
            BotError::MazeChanged { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BotError::PursuerIndexOutOfRange { .. } => "BOT_PURSUER_INDEX_OUT_OF_RANGE",
            BotError::MazeChanged { .. } => "BOT_MAZE_CHANGED",
        }
    }
}
