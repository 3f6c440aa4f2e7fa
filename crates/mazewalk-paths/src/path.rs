//! Paths and their reconstruction from predecessor maps.

use std::collections::HashMap;

use mazewalk_core::Point;

use crate::event::Sink;
use crate::traits::WeightedPather;

/// Predecessor relation: each reached cell maps to the cell it was reached
/// from. The search origin has no entry.
pub type PredMap = HashMap<Point, Point>;

/// An ordered sequence of cells, each orthogonally adjacent to the next.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    /// Wrap a cell sequence.
    pub fn new(cells: Vec<Point>) -> Self {
        Self { cells }
    }

    /// The cells, first to last.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of steps (cells minus one).
    pub fn edges(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell.
    pub fn first(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    /// Last cell.
    pub fn last(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Whether the path goes through `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    /// Total cost of walking the path: the sum of the entering costs of
    /// every cell after the first.
    pub fn cost<P: WeightedPather>(&self, pather: &P) -> i32 {
        self.cells.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
    }

    /// Whether every consecutive pair of cells is one orthogonal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Iterate over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }

    /// Take the cell vector.
    pub fn into_vec(self) -> Vec<Point> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Walk `pred` back from `terminal` to the cell with no predecessor, then
/// reverse, giving origin → terminal.
pub fn reconstruct(terminal: Point, pred: &PredMap) -> Path {
    let mut cells = vec![terminal];
    let mut cur = terminal;
    while let Some(&prev) = pred.get(&cur) {
        // A well-formed map is acyclic, so a walk can never be longer
        // than the map itself.
        if cells.len() > pred.len() {
            break;
        }
        cells.push(prev);
        cur = prev;
    }
    cells.reverse();
    Path::new(cells)
}

/// Join the forward path (origin → `meeting`) with the reversed backward
/// path (`meeting` → backward origin). The meeting cell appears once.
///
/// Without a backward map the forward path is returned as is.
pub fn reconstruct_bidirectional(
    meeting: Point,
    forward: &PredMap,
    backward: Option<&PredMap>,
) -> Path {
    let mut cells = reconstruct(meeting, forward).into_vec();
    if let Some(backward) = backward {
        let back = reconstruct(meeting, backward).into_vec();
        // `back` runs backward origin → meeting; skip the meeting cell.
        cells.extend(back.into_iter().rev().skip(1));
    }
    Path::new(cells)
}

/// Report every cell of a single-direction path as a best-path step.
pub(crate) fn emit_path(sink: &mut dyn Sink, path: &Path) {
    for &p in path {
        sink.on_path_step(p, true, false);
    }
}

/// Report a joined path. Cells after `meeting` belong to the backward half
/// and are flagged `reverse`. When there was no backward half, the meeting
/// cell is reported once more to close the path.
pub(crate) fn emit_joined(sink: &mut dyn Sink, path: &Path, meeting: Point, has_backward: bool) {
    let mut reverse = false;
    for &p in path {
        sink.on_path_step(p, true, reverse);
        if p == meeting {
            reverse = true;
        }
    }
    if !has_backward {
        sink.on_path_step(meeting, true, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{SearchEvent, Trace};

    fn chain(cells: &[(i32, i32)]) -> PredMap {
        cells
            .windows(2)
            .map(|w| (Point::new(w[1].0, w[1].1), Point::new(w[0].0, w[0].1)))
            .collect()
    }

    #[test]
    fn reconstruct_walks_back_to_origin() {
        let pred = chain(&[(0, 0), (0, 1), (1, 1), (2, 1)]);
        let path = reconstruct(Point::new(2, 1), &pred);
        assert_eq!(
            path.cells(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)]
        );
        assert!(path.is_contiguous());
        assert_eq!(path.edges(), 3);
        assert_eq!(path.first(), Some(Point::new(0, 0)));
        assert_eq!(path.last(), Some(Point::new(2, 1)));
    }

    #[test]
    fn reconstruct_from_origin_is_single_cell() {
        let pred = chain(&[(0, 0), (0, 1)]);
        let path = reconstruct(Point::new(0, 0), &pred);
        assert_eq!(path.cells(), &[Point::new(0, 0)]);
        let empty = reconstruct(Point::new(4, 4), &PredMap::new());
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn reconstruct_survives_a_cycle() {
        let mut pred = PredMap::new();
        pred.insert(Point::new(0, 0), Point::new(0, 1));
        pred.insert(Point::new(0, 1), Point::new(0, 0));
        let path = reconstruct(Point::new(0, 0), &pred);
        assert!(path.len() <= 3);
    }

    #[test]
    fn joined_path_deduplicates_the_meeting_cell() {
        let forward = chain(&[(0, 0), (0, 1), (0, 2)]);
        let backward = chain(&[(2, 2), (1, 2), (0, 2)]);
        let path = reconstruct_bidirectional(Point::new(0, 2), &forward, Some(&backward));
        assert_eq!(
            path.cells(),
            &[
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert!(path.is_contiguous());
    }

    #[test]
    fn joined_path_without_backward_map() {
        let forward = chain(&[(0, 0), (1, 0)]);
        let path = reconstruct_bidirectional(Point::new(1, 0), &forward, None);
        assert_eq!(path.cells(), &[Point::new(0, 0), Point::new(1, 0)]);
    }

    #[test]
    fn contiguity_detects_gaps() {
        assert!(!Path::new(vec![Point::new(0, 0), Point::new(1, 1)]).is_contiguous());
        assert!(!Path::new(vec![Point::new(0, 0), Point::new(0, 0)]).is_contiguous());
        assert!(Path::new(vec![Point::new(0, 0)]).is_contiguous());
    }

    #[test]
    fn emit_joined_flags_the_backward_half() {
        let path = Path::new(vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]);
        let mut t = Trace::new();
        emit_joined(&mut t, &path, Point::new(0, 1), true);
        let flags: Vec<bool> = t
            .events()
            .iter()
            .map(|e| matches!(e, SearchEvent::PathStep { reverse: true, .. }))
            .collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn emit_joined_without_backward_repeats_meeting() {
        let path = Path::new(vec![Point::new(0, 0), Point::new(0, 1)]);
        let mut t = Trace::new();
        emit_joined(&mut t, &path, Point::new(0, 1), false);
        assert_eq!(
            t.path_steps().collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 1)]
        );
    }
}
