//! Cost-ordered search shared by Dijkstra, UCS and A*.

use std::collections::{HashMap, HashSet};

use mazewalk_core::Point;

use crate::config::StepCost;
use crate::event::Sink;
use crate::frontier::PriorityFrontier;
use crate::path::{self, PredMap};
use crate::search::{Outcome, Search, Step};
use crate::traits::WeightedPather;

/// How the found path is reported to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Finish {
    /// Every path cell once, start to goal.
    Direct,
    /// Through the joined-path reporter with no backward half, so the goal
    /// is reported a second time.
    Joined,
}

/// Best-first search over a priority frontier keyed by `g + h`.
///
/// Entries are never updated in place: a cheaper route pushes a new entry
/// and the stale one is skipped when popped, once its cell is closed. Ties
/// in priority are broken by insertion order.
pub struct BestFirst<'a, P> {
    pather: &'a P,
    to: Point,
    heuristic: Option<fn(&P, Point, Point) -> i32>,
    step_cost: StepCost,
    finish: Finish,
    open: PriorityFrontier<Point>,
    g: HashMap<Point, i32>,
    closed: HashSet<Point>,
    pred: PredMap,
    nbuf: Vec<Point>,
    steps: usize,
    reached: bool,
    done: Option<Outcome>,
}

impl<'a, P: WeightedPather> BestFirst<'a, P> {
    pub(crate) fn new(
        pather: &'a P,
        from: Point,
        to: Point,
        heuristic: Option<fn(&P, Point, Point) -> i32>,
        step_cost: StepCost,
        finish: Finish,
    ) -> Self {
        let mut open = PriorityFrontier::new();
        let h = heuristic.map_or(0, |h| h(pather, from, to));
        open.push(from, h);
        let mut g = HashMap::new();
        g.insert(from, 0);
        Self {
            pather,
            to,
            heuristic,
            step_cost,
            finish,
            open,
            g,
            closed: HashSet::new(),
            pred: PredMap::new(),
            nbuf: Vec::with_capacity(4),
            steps: 0,
            reached: false,
            done: None,
        }
    }

    /// Best known cost from the start to `p`, if `p` has been reached.
    pub fn g_score(&self, p: Point) -> Option<i32> {
        self.g.get(&p).copied()
    }

    /// Cells expanded so far.
    pub fn closed(&self) -> &HashSet<Point> {
        &self.closed
    }

    /// The predecessor map built so far.
    pub fn predecessors(&self) -> &PredMap {
        &self.pred
    }

    fn edge_cost(&self, from: Point, to: Point) -> i32 {
        match self.step_cost {
            StepCost::Weighted => self.pather.cost(from, to),
            StepCost::Unit => 1,
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.done = Some(outcome.clone());
        outcome
    }

    fn found(&mut self, sink: &mut dyn Sink) -> Outcome {
        let path = match self.finish {
            Finish::Direct => {
                let path = path::reconstruct(self.to, &self.pred);
                path::emit_path(sink, &path);
                path
            }
            Finish::Joined => {
                let path = path::reconstruct_bidirectional(self.to, &self.pred, None);
                path::emit_joined(sink, &path, self.to, false);
                path
            }
        };
        self.finish(Outcome::Found(path))
    }
}

impl<P: WeightedPather> Search for BestFirst<'_, P> {
    fn step(&mut self, sink: &mut dyn Sink) -> Step {
        if let Some(outcome) = &self.done {
            return Step::Done(outcome.clone());
        }
        if self.reached {
            return Step::Reached;
        }
        self.steps += 1;

        // Skip stale entries.
        let current = loop {
            match self.open.pop() {
                None => return Step::Done(self.finish(Outcome::NotFound)),
                Some(p) if self.closed.contains(&p) => continue,
                Some(p) => break p,
            }
        };
        self.closed.insert(current);
        sink.on_visited(current);

        if current == self.to {
            self.reached = true;
            return Step::Reached;
        }

        let current_g = self.g.get(&current).copied().unwrap_or(0);

        self.nbuf.clear();
        self.pather.neighbors(current, &mut self.nbuf);

        for i in 0..self.nbuf.len() {
            let np = self.nbuf[i];
            if self.closed.contains(&np) {
                continue;
            }
            let tentative = current_g + self.edge_cost(current, np);
            if self.g.get(&np).is_some_and(|&g| tentative >= g) {
                continue;
            }
            self.g.insert(np, tentative);
            self.pred.insert(np, current);
            let h = self.heuristic.map_or(0, |h| h(self.pather, np, self.to));
            self.open.push(np, tentative + h);
            sink.on_enqueued(np);
        }

        Step::Pending
    }

    fn complete(&mut self, sink: &mut dyn Sink) -> Option<Outcome> {
        if let Some(outcome) = &self.done {
            return Some(outcome.clone());
        }
        self.reached.then(|| self.found(sink))
    }

    fn steps(&self) -> usize {
        self.steps
    }
}
