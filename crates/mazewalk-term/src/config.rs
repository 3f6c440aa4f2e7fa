use std::time::Duration;

/// Pacing and layout of the terminal animation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TermConfig {
    /// Pause after each visited or enqueued cell.
    pub step_delay: Duration,
    /// Pause after each path cell.
    pub path_delay: Duration,
    /// Draw the colour legend under the maze.
    pub legend: bool,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(50),
            path_delay: Duration::from_millis(100),
            legend: true,
        }
    }
}

impl TermConfig {
    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            path_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Use `delay` between search events and twice that between path cells.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self.path_delay = delay * 2;
        self
    }
}
