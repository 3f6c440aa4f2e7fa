//! A* search.

use mazewalk_core::Point;

use crate::best_first::{BestFirst, Finish};
use crate::config::StepCost;
use crate::traits::AstarPather;

/// A* search. See [`BestFirst`].
pub type AStar<'a, P> = BestFirst<'a, P>;

impl<'a, P: AstarPather> BestFirst<'a, P> {
    /// Start an A* search from `from` towards `to`, guided by
    /// [`AstarPather::estimate`].
    ///
    /// With [`StepCost::Weighted`] the path is a cheapest one. With
    /// [`StepCost::Unit`] every step counts 1, so the path has the fewest
    /// steps and cell costs are ignored.
    pub fn astar(pather: &'a P, from: Point, to: Point, step: StepCost) -> Self {
        BestFirst::new(pather, from, to, Some(P::estimate), step, Finish::Direct)
    }
}
