//! Bidirectional breadth-first search.
//!
//! Two BFS waves grow from the start and the goal. Every round expands one
//! cell from each non-empty side, forward first. The search ends as soon as
//! either wave discovers a cell the other has already marked; that cell is
//! the meeting point. On a four-connected grid this node-by-node alternation
//! still yields a path with the fewest steps.

use std::collections::HashSet;

use mazewalk_core::Point;

use crate::event::Sink;
use crate::frontier::{Fifo, Frontier};
use crate::path::{self, PredMap};
use crate::search::{Outcome, Search, Step};
use crate::traits::Pather;

/// One of the two waves.
#[derive(Debug)]
struct Side {
    queue: Fifo<Point>,
    visited: HashSet<Point>,
    pred: PredMap,
}

impl Side {
    fn new(origin: Point) -> Self {
        let mut queue = Fifo::new();
        queue.push(origin);
        let mut visited = HashSet::new();
        visited.insert(origin);
        Self {
            queue,
            visited,
            pred: PredMap::new(),
        }
    }
}

/// Expand one cell of `side`. Returns the meeting cell if a newly
/// discovered neighbour was already marked by `other`.
fn expand<P: Pather>(
    pather: &P,
    side: &mut Side,
    other: &Side,
    sink: &mut dyn Sink,
    nbuf: &mut Vec<Point>,
) -> Option<Point> {
    let current = side.queue.pop()?;
    sink.on_visited(current);

    nbuf.clear();
    pather.neighbors(current, nbuf);
    for &np in nbuf.iter() {
        if !side.visited.insert(np) {
            continue;
        }
        side.pred.insert(np, current);
        side.queue.push(np);
        sink.on_enqueued(np);
        if other.visited.contains(&np) {
            return Some(np);
        }
    }
    None
}

/// Bidirectional BFS between two cells.
pub struct Bidirectional<'a, P> {
    pather: &'a P,
    from: Point,
    to: Point,
    forward: Side,
    backward: Side,
    meeting: Option<Point>,
    nbuf: Vec<Point>,
    steps: usize,
    done: Option<Outcome>,
}

impl<'a, P: Pather> Bidirectional<'a, P> {
    /// Start a bidirectional search between `from` and `to`.
    pub fn new(pather: &'a P, from: Point, to: Point) -> Self {
        Self {
            pather,
            from,
            to,
            forward: Side::new(from),
            backward: Side::new(to),
            meeting: None,
            nbuf: Vec::with_capacity(4),
            steps: 0,
            done: None,
        }
    }

    /// The cell where the waves met, once they have.
    pub fn meeting(&self) -> Option<Point> {
        self.meeting
    }

    /// Cells marked by the wave from the start.
    pub fn forward_visited(&self) -> &HashSet<Point> {
        &self.forward.visited
    }

    /// Cells marked by the wave from the goal.
    pub fn backward_visited(&self) -> &HashSet<Point> {
        &self.backward.visited
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.done = Some(outcome.clone());
        outcome
    }

    fn met(&mut self, meeting: Point) -> Step {
        self.meeting = Some(meeting);
        Step::Reached
    }
}

impl<P: Pather> Search for Bidirectional<'_, P> {
    fn step(&mut self, sink: &mut dyn Sink) -> Step {
        if let Some(outcome) = &self.done {
            return Step::Done(outcome.clone());
        }
        if self.meeting.is_some() {
            return Step::Reached;
        }
        if self.steps == 0 && self.from == self.to {
            return self.met(self.from);
        }
        if self.forward.queue.is_empty() && self.backward.queue.is_empty() {
            return Step::Done(self.finish(Outcome::NotFound));
        }
        self.steps += 1;

        if let Some(m) = expand(self.pather, &mut self.forward, &self.backward, sink, &mut self.nbuf) {
            return self.met(m);
        }
        if let Some(m) = expand(self.pather, &mut self.backward, &self.forward, sink, &mut self.nbuf) {
            return self.met(m);
        }
        Step::Pending
    }

    fn complete(&mut self, sink: &mut dyn Sink) -> Option<Outcome> {
        if let Some(outcome) = &self.done {
            return Some(outcome.clone());
        }
        let meeting = self.meeting?;
        let path = if self.from == self.to {
            let path = path::Path::new(vec![self.from]);
            path::emit_path(sink, &path);
            path
        } else {
            let path = path::reconstruct_bidirectional(meeting, &self.forward.pred, Some(&self.backward.pred));
            path::emit_joined(sink, &path, meeting, true);
            path
        };
        Some(self.finish(Outcome::Found(path)))
    }

    fn steps(&self) -> usize {
        self.steps
    }
}
