//! **mazewalk-core**: the maze model shared by the mazewalk crates.
//!
//! This crate provides the geometry primitives, the validated [`Maze`] grid
//! with its [`Tile`]s, the structural [`MazeError`] taxonomy, and the
//! cooperative-cancellation [`Context`] used by search runs.

pub mod context;
pub mod error;
pub mod geom;
pub mod maze;
pub mod tile;

pub use context::Context;
pub use error::MazeError;
pub use geom::{Point, Range};
pub use maze::Maze;
pub use tile::{MAX_COST, Tile};
