//! Depth-first search.

use mazewalk_core::Point;

use crate::frontier::Lifo;
use crate::traits::Pather;
use crate::traverse::{Mark, Traversal};

/// Depth-first search: LIFO frontier, cells marked visited (and reported)
/// when popped. Finds *a* path, not necessarily a short one.
pub type Dfs<'a, P> = Traversal<'a, P, Lifo<Point>>;

impl<'a, P: Pather> Traversal<'a, P, Lifo<Point>> {
    /// Start a depth-first search from `from` towards `to`.
    pub fn dfs(pather: &'a P, from: Point, to: Point) -> Self {
        Traversal::new(pather, from, to, Lifo::new(), Mark::OnPop)
    }
}
