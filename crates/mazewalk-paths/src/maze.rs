//! Pather implementations for [`Maze`].

use mazewalk_core::{MAX_COST, Maze, Point};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors_into(p, buf);
    }
}

impl WeightedPather for Maze {
    /// The cost of entering `to`. Neighbours are never walls, so the
    /// fallback only applies to callers asking about arbitrary points.
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.cost_of(to).unwrap_or(MAX_COST)
    }
}

impl AstarPather for Maze {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_as_pather() {
        let m = Maze::parse("S4\n.G").unwrap();
        let mut buf = Vec::new();
        Pather::neighbors(&m, Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(m.cost(Point::new(0, 0), Point::new(0, 1)), 4);
        assert_eq!(m.cost(Point::new(0, 1), Point::new(1, 1)), 1);
        assert_eq!(m.estimate(m.start(), m.goal()), 2);
    }
}
