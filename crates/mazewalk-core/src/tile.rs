//! Maze tiles.

use std::fmt;

use crate::error::MazeError;

/// Highest cost an open tile may carry.
pub const MAX_COST: i32 = 5;

/// The content of one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Impassable.
    Wall,
    /// The unique start cell.
    Start,
    /// The unique goal cell.
    Goal,
    /// A passable cell; entering it costs the given amount (`1..=MAX_COST`).
    Open(i32),
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Open(1)
    }
}

impl Tile {
    /// An open tile with a validated cost.
    pub fn open(cost: i32) -> Result<Self, MazeError> {
        if (1..=MAX_COST).contains(&cost) {
            Ok(Tile::Open(cost))
        } else {
            Err(MazeError::InvalidCost { cost })
        }
    }

    /// Whether the tile can be entered.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Cost of entering this tile. Start and goal cost 1, walls have none.
    #[inline]
    pub fn cost(self) -> Option<i32> {
        match self {
            Tile::Wall => None,
            Tile::Start | Tile::Goal => Some(1),
            Tile::Open(c) => Some(c),
        }
    }

    /// Text-format character: `#` wall, `S` start, `G` goal, `.` cost 1,
    /// `2`..`5` other costs.
    pub fn to_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::Goal => 'G',
            Tile::Open(1) => '.',
            Tile::Open(c) => char::from_digit(c as u32, 10).unwrap_or('?'),
        }
    }

    /// Inverse of [`to_char`](Self::to_char). `1` is accepted as an
    /// alternative spelling of `.`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            'S' | 's' => Some(Tile::Start),
            'G' | 'g' => Some(Tile::Goal),
            '.' => Some(Tile::Open(1)),
            '1'..='5' => ch.to_digit(10).map(|d| Tile::Open(d as i32)),
            _ => None,
        }
    }

    /// Decode the legacy numeric encoding: 0 wall, 1 start, 2 goal,
    /// 3..=5 open cell of that cost.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Tile::Wall),
            1 => Some(Tile::Start),
            2 => Some(Tile::Goal),
            3..=MAX_COST => Some(Tile::Open(code)),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
