//! Unweighted traversal shared by breadth-first and depth-first search.
//!
//! The two differ in their frontier (queue vs stack) and in when a cell
//! counts as visited: BFS marks on enqueue so a cell is never queued twice,
//! DFS marks on pop. Both stop as soon as the goal is discovered and leave
//! path reconstruction to [`Search::complete`].

use std::collections::HashSet;

use mazewalk_core::Point;

use crate::event::Sink;
use crate::frontier::Frontier;
use crate::path::{self, PredMap};
use crate::search::{Outcome, Search, Step};
use crate::traits::Pather;

/// When a cell enters the visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    OnPush,
    OnPop,
}

/// Frontier-generic unweighted search. See [`Bfs`](crate::Bfs) and
/// [`Dfs`](crate::Dfs).
pub struct Traversal<'a, P, F> {
    pather: &'a P,
    from: Point,
    to: Point,
    frontier: F,
    mark: Mark,
    visited: HashSet<Point>,
    pred: PredMap,
    nbuf: Vec<Point>,
    steps: usize,
    reached: Option<Point>,
    done: Option<Outcome>,
}

impl<'a, P: Pather, F: Frontier<Point>> Traversal<'a, P, F> {
    pub(crate) fn new(pather: &'a P, from: Point, to: Point, mut frontier: F, mark: Mark) -> Self {
        let mut visited = HashSet::new();
        frontier.push(from);
        if mark == Mark::OnPush {
            visited.insert(from);
        }
        Self {
            pather,
            from,
            to,
            frontier,
            mark,
            visited,
            pred: PredMap::new(),
            nbuf: Vec::with_capacity(4),
            steps: 0,
            reached: None,
            done: None,
        }
    }

    /// Cells marked visited so far.
    pub fn visited(&self) -> &HashSet<Point> {
        &self.visited
    }

    /// The predecessor map built so far.
    pub fn predecessors(&self) -> &PredMap {
        &self.pred
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.done = Some(outcome.clone());
        outcome
    }

    /// Next cell to expand. With mark-on-pop, cells pushed more than once
    /// are skipped after their first pop.
    fn next_cell(&mut self) -> Option<Point> {
        loop {
            let p = self.frontier.pop()?;
            match self.mark {
                Mark::OnPush => return Some(p),
                Mark::OnPop => {
                    if self.visited.insert(p) {
                        return Some(p);
                    }
                }
            }
        }
    }
}

impl<P: Pather, F: Frontier<Point>> Search for Traversal<'_, P, F> {
    fn step(&mut self, sink: &mut dyn Sink) -> Step {
        if let Some(outcome) = &self.done {
            return Step::Done(outcome.clone());
        }
        if self.reached.is_some() {
            return Step::Reached;
        }
        if self.steps == 0 && self.from == self.to {
            self.reached = Some(self.from);
            return Step::Reached;
        }
        self.steps += 1;

        let Some(current) = self.next_cell() else {
            return Step::Done(self.finish(Outcome::NotFound));
        };
        if self.mark == Mark::OnPop {
            sink.on_visited(current);
        }

        self.nbuf.clear();
        self.pather.neighbors(current, &mut self.nbuf);

        for i in 0..self.nbuf.len() {
            let np = self.nbuf[i];
            if self.visited.contains(&np) {
                continue;
            }
            if self.mark == Mark::OnPush {
                self.visited.insert(np);
                sink.on_visited(np);
            }
            // With mark-on-pop the latest push wins, and it is also the one
            // popped first.
            self.pred.insert(np, current);
            self.frontier.push(np);

            if np == self.to {
                self.reached = Some(np);
                return Step::Reached;
            }
        }

        Step::Pending
    }

    fn complete(&mut self, sink: &mut dyn Sink) -> Option<Outcome> {
        if let Some(outcome) = &self.done {
            return Some(outcome.clone());
        }
        let terminal = self.reached?;
        let path = path::reconstruct(terminal, &self.pred);
        path::emit_path(sink, &path);
        Some(self.finish(Outcome::Found(path)))
    }

    fn steps(&self) -> usize {
        self.steps
    }
}
