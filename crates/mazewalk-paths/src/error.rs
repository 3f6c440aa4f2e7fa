use thiserror::Error;

/// Reasons a search run or a trace replay did not produce an outcome.
///
/// Running out of frontier is not an error; it is reported as
/// [`Outcome::NotFound`](crate::Outcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The run's [`Context`](mazewalk_core::Context) was cancelled.
    #[error("search cancelled")]
    Cancelled,
    /// A strategy name did not match any known strategy.
    #[error("unknown strategy {0:?} (expected one of bfs, dfs, dijkstra, ucs, astar, bidirectional)")]
    UnknownStrategy(String),
}
