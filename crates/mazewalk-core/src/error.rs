//! Errors raised while building or addressing a [`Maze`](crate::Maze).

use thiserror::Error;

use crate::geom::Point;

/// Structural problems with a maze description or a coordinate.
///
/// All of these are rejected before a search ever starts; an exhausted
/// search is reported as a normal outcome, never as a `MazeError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The maze has no rows or no columns.
    #[error("maze is empty")]
    Empty,
    /// A row does not have the same width as the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The tile count does not match `rows * cols`.
    #[error("expected {expected} tiles for the given size, got {found}")]
    SizeMismatch { expected: usize, found: usize },
    /// No start cell was given.
    #[error("maze has no start cell")]
    NoStart,
    /// No goal cell was given.
    #[error("maze has no goal cell")]
    NoGoal,
    /// A second start cell was found.
    #[error("duplicate start cell at {second} (first at {first})")]
    DuplicateStart { first: Point, second: Point },
    /// A second goal cell was found.
    #[error("duplicate goal cell at {second} (first at {first})")]
    DuplicateGoal { first: Point, second: Point },
    /// A character in the text format has no tile meaning.
    #[error("invalid tile \u{201c}{ch}\u{201d} at {pos}")]
    InvalidTile { ch: char, pos: Point },
    /// A numeric legacy code has no tile meaning.
    #[error("invalid tile code {code} at {pos}")]
    InvalidCode { code: i32, pos: Point },
    /// A numeric tile code that is not a number.
    #[error("malformed tile code {text:?} at {pos}")]
    BadCode { text: String, pos: Point },
    /// An open-cell cost outside `1..=5`.
    #[error("invalid cost {cost} (expected 1..=5)")]
    InvalidCost { cost: i32 },
    /// A coordinate could not be parsed from text.
    #[error("malformed coordinate {0:?}")]
    BadCoordinate(String),
    /// A coordinate lies outside the maze.
    #[error("coordinate {0} is outside the maze")]
    OutOfBounds(Point),
}
