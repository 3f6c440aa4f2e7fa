//! Whole-grid distance maps.
//!
//! These are not part of the step-by-step searches; they compute exact
//! distances from a set of sources in one pass and serve as a reference
//! for what a search should find.

use std::collections::VecDeque;

use mazewalk_core::{Point, Range};

use crate::frontier::PriorityFrontier;
use crate::traits::{Pather, WeightedPather};

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Distances from a set of sources over a rectangular range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    bounds: Range,
    dist: Vec<i32>,
}

impl DistanceMap {
    fn new(bounds: Range) -> Self {
        Self {
            bounds,
            dist: vec![UNREACHABLE; bounds.len()],
        }
    }

    /// Range the map covers.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Distance to `p`, or [`UNREACHABLE`] if `p` was not reached or lies
    /// outside the range.
    pub fn at(&self, p: Point) -> i32 {
        self.bounds.index(p).map_or(UNREACHABLE, |i| self.dist[i])
    }

    /// Distance to `p`, if reached.
    pub fn get(&self, p: Point) -> Option<i32> {
        Some(self.at(p)).filter(|&d| d != UNREACHABLE)
    }

    /// Reached cells with their distance, in row-major order.
    pub fn reached(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.bounds
            .iter()
            .zip(self.dist.iter().copied())
            .filter(|&(_, d)| d != UNREACHABLE)
    }

    fn slot(&mut self, p: Point) -> Option<&mut i32> {
        let i = self.bounds.index(p)?;
        self.dist.get_mut(i)
    }
}

/// Multi-source breadth-first distance map. Each step costs 1.
pub fn bfs_map<P: Pather>(pather: &P, bounds: Range, sources: &[Point]) -> DistanceMap {
    let mut map = DistanceMap::new(bounds);
    let mut queue = VecDeque::new();

    for &src in sources {
        if let Some(d) = map.slot(src) {
            if *d == UNREACHABLE {
                *d = 0;
                queue.push_back((src, 0));
            }
        }
    }

    let mut nbuf = Vec::with_capacity(4);
    while let Some((cp, cd)) = queue.pop_front() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(d) = map.slot(np) else {
                continue;
            };
            if *d != UNREACHABLE {
                continue;
            }
            *d = cd + 1;
            queue.push_back((np, cd + 1));
        }
    }
    map
}

/// Multi-source Dijkstra distance map: each entry is the cheapest total
/// entering cost from any source.
pub fn dijkstra_map<P: WeightedPather>(pather: &P, bounds: Range, sources: &[Point]) -> DistanceMap {
    let mut map = DistanceMap::new(bounds);
    let mut open = PriorityFrontier::new();

    for &src in sources {
        if let Some(d) = map.slot(src) {
            *d = 0;
            open.push(src, 0);
        }
    }

    let mut nbuf = Vec::with_capacity(4);
    while let Some((cp, cg)) = open.pop_with_priority() {
        // Skip stale entries.
        if cg > map.at(cp) {
            continue;
        }
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let tentative = cg + pather.cost(cp, np);
            let Some(d) = map.slot(np) else {
                continue;
            };
            if tentative >= *d {
                continue;
            }
            *d = tentative;
            open.push(np, tentative);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::Maze;

    #[test]
    fn bfs_distances() {
        let m = Maze::parse("S.#\n..#\n#.G").unwrap();
        let map = bfs_map(&m, m.bounds(), &[m.start()]);
        assert_eq!(map.at(m.start()), 0);
        assert_eq!(map.at(Point::new(1, 1)), 2);
        assert_eq!(map.at(m.goal()), 4);
        assert_eq!(map.at(Point::new(0, 2)), UNREACHABLE);
        assert_eq!(map.get(Point::new(2, 0)), None);
        assert_eq!(map.at(Point::new(9, 9)), UNREACHABLE);
        assert_eq!(map.reached().count(), 6);
    }

    #[test]
    fn dijkstra_distances() {
        let m = Maze::parse("S55G\n....").unwrap();
        let map = dijkstra_map(&m, m.bounds(), &[m.start()]);
        assert_eq!(map.at(m.goal()), 5);
        assert_eq!(map.at(Point::new(0, 1)), 5);
        assert_eq!(map.at(Point::new(0, 2)), 8);
        assert_eq!(map.at(Point::new(1, 3)), 4);
    }

    #[test]
    fn multiple_sources() {
        let m = Maze::parse("S....G").unwrap();
        let map = bfs_map(&m, m.bounds(), &[m.start(), m.goal()]);
        let dists: Vec<i32> = map.reached().map(|(_, d)| d).collect();
        assert_eq!(dists, vec![0, 1, 2, 2, 1, 0]);
    }
}
