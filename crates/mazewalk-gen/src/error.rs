use mazewalk_core::MazeError;
use thiserror::Error;

/// Reasons a maze could not be generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// The grid cannot hold both a start and a goal.
    #[error("maze of {rows}x{cols} is too small (need at least two cells)")]
    TooSmall { rows: usize, cols: usize },
    /// The grid has more cells than a coordinate can address.
    #[error("maze of {rows}x{cols} is too large")]
    TooLarge { rows: usize, cols: usize },
    /// A ratio outside `[0, 1]`.
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRatio { name: &'static str, value: f64 },
    /// `require_path` was set and no attempt connected start and goal.
    #[error("no connected maze after {attempts} attempts")]
    NoPath { attempts: usize },
    /// The generated grid was rejected.
    #[error(transparent)]
    Maze(#[from] MazeError),
}
