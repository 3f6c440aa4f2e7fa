//! The steppable search interface shared by every strategy.

use crate::event::Sink;
use crate::path::Path;

/// Final result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was reached; the path runs start → goal.
    Found(Path),
    /// The frontier ran out without reaching the goal.
    NotFound,
}

impl Outcome {
    /// The found path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::NotFound => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// Result of advancing a search by one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// More work remains.
    Pending,
    /// The goal was reached. The path has not been reconstructed yet; call
    /// [`Search::complete`] to do so.
    Reached,
    /// The search terminated.
    Done(Outcome),
}

/// A search expressed as a state machine.
///
/// Each call to [`step`](Self::step) performs one frontier-expansion round
/// and reports the cells it touched to `sink`, in processing order. Reaching
/// the goal and reporting the path are separate: `step` returns
/// [`Step::Reached`] and keeps returning it until [`complete`](Self::complete)
/// reconstructs the path, which lets a caller abandon the run in between.
/// Once a search is done, further calls return the same outcome and emit
/// nothing.
pub trait Search {
    /// Advance by one round.
    fn step(&mut self, sink: &mut dyn Sink) -> Step;

    /// Reconstruct the path and report it to `sink`. Returns `None` while
    /// the goal has not been reached and the search is not done.
    fn complete(&mut self, sink: &mut dyn Sink) -> Option<Outcome>;

    /// Number of rounds performed so far.
    fn steps(&self) -> usize;

    /// Drive the search to completion.
    fn run(&mut self, sink: &mut dyn Sink) -> Outcome {
        loop {
            match self.step(sink) {
                Step::Pending => {}
                Step::Reached => return self.complete(sink).unwrap_or(Outcome::NotFound),
                Step::Done(outcome) => return outcome,
            }
        }
    }
}
