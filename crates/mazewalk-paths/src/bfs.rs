//! Breadth-first search.

use mazewalk_core::Point;

use crate::frontier::Fifo;
use crate::traits::Pather;
use crate::traverse::{Mark, Traversal};

/// Breadth-first search: FIFO frontier, cells marked visited (and reported
/// through [`Sink::on_visited`](crate::Sink::on_visited)) when they are
/// enqueued. The path found is shortest in number of steps.
pub type Bfs<'a, P> = Traversal<'a, P, Fifo<Point>>;

impl<'a, P: Pather> Traversal<'a, P, Fifo<Point>> {
    /// Start a breadth-first search from `from` towards `to`.
    pub fn bfs(pather: &'a P, from: Point, to: Point) -> Self {
        Traversal::new(pather, from, to, Fifo::new(), Mark::OnPush)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Trace;
    use crate::search::{Outcome, Search, Step};
    use mazewalk_core::Maze;

    #[test]
    fn open_3x3() {
        let m = Maze::parse("S..\n...\n..G").unwrap();
        let mut trace = Trace::new();
        let outcome = Bfs::bfs(&m, m.start(), m.goal()).run(&mut trace);
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 5);
        assert!(path.is_contiguous());
        assert_eq!(path.first(), Some(m.start()));
        assert_eq!(path.last(), Some(m.goal()));
        // North, south, west, east order: the first discoveries from (0,0)
        // are (1,0) then (0,1).
        let visited: Vec<_> = trace.visited().collect();
        assert_eq!(&visited[..2], &[Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(trace.path_steps().count(), 5);
    }

    #[test]
    fn discovery_order_and_path() {
        let m = Maze::parse("S.#\n..#\n#.G").unwrap();
        let mut trace = Trace::new();
        let outcome = Bfs::bfs(&m, m.start(), m.goal()).run(&mut trace);
        assert_eq!(
            trace.visited().collect::<Vec<_>>(),
            vec![
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
        assert_eq!(
            outcome.path().unwrap().cells(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn each_cell_visited_once() {
        let m = Maze::parse("S....\n.....\n.....\n....G").unwrap();
        let mut trace = Trace::new();
        Bfs::bfs(&m, m.start(), m.goal()).run(&mut trace);
        let mut seen = std::collections::HashSet::new();
        for p in trace.visited() {
            assert!(seen.insert(p), "{p} visited twice");
        }
    }

    #[test]
    fn not_found_when_walled_off() {
        let m = Maze::parse("S.#.\n..#G").unwrap();
        let mut bfs = Bfs::bfs(&m, m.start(), m.goal());
        let mut trace = Trace::new();
        assert_eq!(bfs.run(&mut trace), Outcome::NotFound);
        assert!(trace.visited().all(|p| p.col < 2));
        assert_eq!(bfs.visited().len(), 4);
    }

    #[test]
    fn step_is_one_round_and_sticky_when_done() {
        let m = Maze::parse("S.G").unwrap();
        let mut bfs = Bfs::bfs(&m, m.start(), m.goal());
        let mut trace = Trace::new();
        assert_eq!(bfs.step(&mut trace), Step::Pending);
        assert_eq!(trace.visited().collect::<Vec<_>>(), vec![Point::new(0, 1)]);
        assert_eq!(bfs.step(&mut trace), Step::Reached);
        assert_eq!(trace.path_steps().count(), 0);
        let first = bfs.complete(&mut trace).unwrap();
        assert_eq!(first.path().map(|p| p.len()), Some(3));
        let len = trace.len();
        assert_eq!(bfs.step(&mut trace), Step::Done(first));
        assert_eq!(trace.len(), len);
        assert_eq!(bfs.steps(), 2);
    }
}
