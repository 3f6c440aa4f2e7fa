//! The immutable maze grid.
//!
//! A [`Maze`] is a rectangle of [`Tile`]s with exactly one start and one
//! goal. The invariant is checked by every constructor, so a `Maze` value
//! is always valid and read-only afterwards.

use std::fmt;

use crate::error::MazeError;
use crate::geom::{Point, Range};
use crate::tile::Tile;

/// A validated maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    bounds: Range,
    tiles: Vec<Tile>,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Build a maze from a row-major tile vector.
    pub fn new(rows: usize, cols: usize, tiles: Vec<Tile>) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }
        if rows.checked_mul(cols) != Some(tiles.len()) {
            return Err(MazeError::SizeMismatch {
                expected: rows.saturating_mul(cols),
                found: tiles.len(),
            });
        }
        let bounds = Range::with_size(rows as i32, cols as i32);

        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;
        for (p, &t) in bounds.iter().zip(tiles.iter()) {
            match t {
                Tile::Start => {
                    if let Some(first) = start {
                        return Err(MazeError::DuplicateStart { first, second: p });
                    }
                    start = Some(p);
                }
                Tile::Goal => {
                    if let Some(first) = goal {
                        return Err(MazeError::DuplicateGoal { first, second: p });
                    }
                    goal = Some(p);
                }
                Tile::Open(cost) => {
                    Tile::open(cost)?;
                }
                Tile::Wall => {}
            }
        }

        Ok(Self {
            bounds,
            tiles,
            start: start.ok_or(MazeError::NoStart)?,
            goal: goal.ok_or(MazeError::NoGoal)?,
        })
    }

    /// Build a maze from rows of tiles. Every row must have the same width.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, MazeError> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            tiles.extend(row);
        }
        Self::new(height, width, tiles)
    }

    /// Parse the text format, one line per row:
    ///
    /// ```text
    /// S..#
    /// .#3.
    /// ...G
    /// ```
    ///
    /// `#` is a wall, `S` the start, `G` the goal, `.` an open cell of
    /// cost 1 and `1`..`5` open cells of that cost. Leading and trailing
    /// whitespace is trimmed from the whole string and from each line.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let mut rows = Vec::new();
        for (r, line) in s.trim().lines().enumerate() {
            let mut row = Vec::new();
            for (c, ch) in line.trim().chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(MazeError::InvalidTile {
                    ch,
                    pos: Point::new(r as i32, c as i32),
                })?;
                row.push(tile);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Build a maze from the legacy numeric encoding (0 wall, 1 start,
    /// 2 goal, 3..=5 open cell of that cost).
    pub fn from_codes<R: AsRef<[i32]>>(codes: &[R]) -> Result<Self, MazeError> {
        let mut rows = Vec::with_capacity(codes.len());
        for (r, line) in codes.iter().enumerate() {
            let mut row = Vec::with_capacity(line.as_ref().len());
            for (c, &code) in line.as_ref().iter().enumerate() {
                let tile = Tile::from_code(code).ok_or(MazeError::InvalidCode {
                    code,
                    pos: Point::new(r as i32, c as i32),
                })?;
                row.push(tile);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// The range covered by the maze.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The start cell.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether the maze contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Validate an externally supplied coordinate.
    pub fn checked(&self, p: Point) -> Result<Point, MazeError> {
        if self.contains(p) {
            Ok(p)
        } else {
            Err(MazeError::OutOfBounds(p))
        }
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.tiles[i])
    }

    /// Whether the point is inside the maze and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_passable)
    }

    /// Cost of entering `p`; `None` for walls and points outside the maze.
    pub fn cost_of(&self, p: Point) -> Option<i32> {
        self.tile(p).and_then(Tile::cost)
    }

    /// Passable orthogonal neighbours of `p` in north, south, west, east
    /// order.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Append the passable neighbours of `p` to `buf` (same order as
    /// [`neighbors`](Self::neighbors)).
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }

    /// Count tiles satisfying a predicate.
    pub fn count(&self, mut f: impl FnMut(Tile) -> bool) -> usize {
        self.tiles.iter().filter(|&&t| f(t)).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, t)) in self.iter().enumerate() {
            if i > 0 && p.col == 0 {
                writeln!(f)?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// The text format is the serialized form, so deserialization goes through
// the same validation as `parse`.
#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.to_string();
        let lines: Vec<&str> = text.lines().collect();
        serde::Serialize::serialize(&lines, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = <Vec<String> as serde::Deserialize>::deserialize(deserializer)?;
        Maze::parse(&lines.join("\n")).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_serializes_as_text_rows() {
        let m = Maze::parse("S.#\n.2G").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"["S.#",".2G"]"#);
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn invalid_maze_is_rejected_on_deserialize() {
        assert!(serde_json::from_str::<Maze>(r#"["S..","..."]"#).is_err());
    }
}
