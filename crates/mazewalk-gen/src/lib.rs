//! Random maze generation for mazewalk.

pub mod config;
pub mod error;
pub mod mapgen;

pub use config::GenConfig;
pub use error::GenError;
pub use mapgen::MazeGen;
