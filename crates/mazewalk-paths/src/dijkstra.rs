//! Dijkstra and uniform-cost search.
//!
//! Both expand cells in order of cumulative entering cost and return a
//! cheapest path. They only differ in how the path is reported: UCS goes
//! through the joined-path reporter, which names the goal twice.

use mazewalk_core::Point;

use crate::best_first::{BestFirst, Finish};
use crate::config::StepCost;
use crate::traits::WeightedPather;

/// Dijkstra's algorithm. See [`BestFirst`].
pub type Dijkstra<'a, P> = BestFirst<'a, P>;

/// Uniform-cost search. See [`BestFirst`].
pub type Ucs<'a, P> = BestFirst<'a, P>;

impl<'a, P: WeightedPather> BestFirst<'a, P> {
    /// Start a Dijkstra search from `from` towards `to`.
    pub fn dijkstra(pather: &'a P, from: Point, to: Point) -> Self {
        BestFirst::new(pather, from, to, None, StepCost::Weighted, Finish::Direct)
    }

    /// Start a uniform-cost search from `from` towards `to`.
    pub fn ucs(pather: &'a P, from: Point, to: Point) -> Self {
        BestFirst::new(pather, from, to, None, StepCost::Weighted, Finish::Joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bfs;
    use crate::event::{SearchEvent, Trace};
    use crate::search::{Outcome, Search};
    use mazewalk_core::Maze;

    const DETOUR: &str = "S55G\n....";

    #[test]
    fn takes_the_cheap_detour() {
        let m = Maze::parse(DETOUR).unwrap();
        let outcome = Dijkstra::dijkstra(&m, m.start(), m.goal()).run(&mut Trace::new());
        let path = outcome.path().unwrap();
        assert_eq!(
            path.cells(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(1, 3),
                Point::new(0, 3),
            ]
        );
        assert_eq!(path.cost(&m), 5);

        // Fewest steps is the expensive row.
        let bfs = Bfs::bfs(&m, m.start(), m.goal()).run(&mut Trace::new());
        assert_eq!(bfs.path().unwrap().len(), 4);
        assert_eq!(bfs.path().unwrap().cost(&m), 11);
    }

    #[test]
    fn g_scores_and_closed_set() {
        let m = Maze::parse(DETOUR).unwrap();
        let mut d = Dijkstra::dijkstra(&m, m.start(), m.goal());
        let mut trace = Trace::new();
        d.run(&mut trace);
        assert_eq!(d.g_score(m.goal()), Some(5));
        assert_eq!(d.g_score(m.start()), Some(0));
        assert!(d.closed().contains(&m.goal()));
        assert_eq!(trace.visited().count(), d.closed().len());
        assert_eq!(trace.visited().next(), Some(m.start()));
        assert_eq!(trace.visited().last(), Some(m.goal()));
    }

    #[test]
    fn visits_each_cell_once() {
        let m = Maze::parse("S.3.\n2.4.\n..5G").unwrap();
        let mut trace = Trace::new();
        Dijkstra::dijkstra(&m, m.start(), m.goal()).run(&mut trace);
        let mut seen = std::collections::HashSet::new();
        for p in trace.visited() {
            assert!(seen.insert(p), "{p} visited twice");
        }
    }

    #[test]
    fn ucs_reports_the_goal_twice() {
        let m = Maze::parse(DETOUR).unwrap();
        let mut trace = Trace::new();
        let outcome = Ucs::ucs(&m, m.start(), m.goal()).run(&mut trace);
        let path = outcome.path().unwrap();
        assert_eq!(path.cost(&m), 5);
        let steps: Vec<_> = trace.path_steps().collect();
        assert_eq!(steps.len(), path.len() + 1);
        assert_eq!(&steps[..path.len()], path.cells());
        assert_eq!(steps[path.len()], m.goal());
        assert!(trace.events().iter().all(|e| !matches!(
            e,
            SearchEvent::PathStep { reverse: true, .. }
        )));
    }

    #[test]
    fn ucs_matches_dijkstra_exploration() {
        let m = Maze::parse("S.3.\n2#4.\n..5G").unwrap();
        let mut a = Trace::new();
        let mut b = Trace::new();
        Dijkstra::dijkstra(&m, m.start(), m.goal()).run(&mut a);
        Ucs::ucs(&m, m.start(), m.goal()).run(&mut b);
        assert_eq!(a.visited().collect::<Vec<_>>(), b.visited().collect::<Vec<_>>());
        assert_eq!(a.enqueued().collect::<Vec<_>>(), b.enqueued().collect::<Vec<_>>());
    }

    #[test]
    fn not_found_when_walled_off() {
        let m = Maze::parse("S#.\n##G").unwrap();
        let mut trace = Trace::new();
        assert_eq!(
            Dijkstra::dijkstra(&m, m.start(), m.goal()).run(&mut trace),
            Outcome::NotFound
        );
        assert_eq!(trace.visited().collect::<Vec<_>>(), vec![m.start()]);
        assert_eq!(trace.path_steps().count(), 0);
    }
}
