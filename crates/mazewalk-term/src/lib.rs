//! Crossterm animation of mazewalk searches.
//!
//! [`TerminalSink`] implements [`mazewalk_paths::Sink`]: it draws the maze
//! once, then recolours one cell per search event with a configurable
//! pause, so a recorded [`Trace`](mazewalk_paths::Trace) replayed into it
//! plays back as an animation.

mod config;
mod glyph;
mod sink;

pub use config::TermConfig;
pub use glyph::{Glyph, Mark, glyph, legend};
pub use sink::TerminalSink;
