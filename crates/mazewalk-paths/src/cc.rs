//! Reachability queries.

use std::collections::HashSet;

use mazewalk_core::{Point, Range};

use crate::traits::Pather;

/// Flood-fill from `from` and return every cell connected to it inside
/// `bounds`, `from` first. Empty if `from` lies outside `bounds`.
pub fn reachable<P: Pather>(pather: &P, bounds: Range, from: Point) -> Vec<Point> {
    let mut result = Vec::new();
    if !bounds.contains(from) {
        return result;
    }

    let mut seen = HashSet::new();
    let mut stack = vec![from];
    seen.insert(from);
    result.push(from);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(cp) = stack.pop() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for i in 0..nbuf.len() {
            let np = nbuf[i];
            if bounds.contains(np) && seen.insert(np) {
                stack.push(np);
                result.push(np);
            }
        }
    }
    result
}

/// Whether a path of neighbours links `a` and `b` inside `bounds`.
pub fn connected<P: Pather>(pather: &P, bounds: Range, a: Point, b: Point) -> bool {
    reachable(pather, bounds, a).contains(&b)
}
