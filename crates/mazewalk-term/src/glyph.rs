//! What a cell looks like on screen.

use crossterm::style::Color;

use mazewalk_core::Tile;

/// Search state drawn over a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    None,
    Enqueued,
    Visited,
    /// Part of the final route.
    BestPath,
    /// Backward half of a joined bidirectional route.
    ReversePath,
}

impl Mark {
    /// Combine the current mark with a new one. Path marks always win and
    /// replace each other; a visited cell does not go back to enqueued.
    pub fn merge(self, new: Mark) -> Mark {
        match (self, new) {
            (_, Mark::BestPath | Mark::ReversePath) => new,
            (Mark::BestPath | Mark::ReversePath, _) => self,
            (Mark::Visited, Mark::Enqueued) => Mark::Visited,
            (_, new) => new,
        }
    }

    /// Mark for a path step event.
    pub fn path(reverse: bool) -> Mark {
        if reverse { Mark::ReversePath } else { Mark::BestPath }
    }
}

/// A character with colours, two terminal columns wide once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

fn cost_color(cost: i32) -> Color {
    match cost {
        ..=1 => Color::Grey,
        2 => Color::Rgb { r: 170, g: 210, b: 120 },
        3 => Color::Rgb { r: 120, g: 190, b: 90 },
        4 => Color::Rgb { r: 220, g: 190, b: 70 },
        _ => Color::Rgb { r: 220, g: 120, b: 50 },
    }
}

fn mark_bg(mark: Mark) -> Option<Color> {
    match mark {
        Mark::None => None,
        Mark::Enqueued => Some(Color::DarkBlue),
        Mark::Visited => Some(Color::DarkCyan),
        Mark::BestPath => Some(Color::DarkGreen),
        Mark::ReversePath => Some(Color::DarkYellow),
    }
}

/// The glyph of `tile` under `mark`.
pub fn glyph(tile: Tile, mark: Mark) -> Glyph {
    let bg = mark_bg(mark).unwrap_or(Color::Reset);
    match tile {
        Tile::Wall => Glyph {
            ch: '#',
            fg: Color::DarkGrey,
            bg: Color::DarkGrey,
        },
        Tile::Start => Glyph {
            ch: 'S',
            fg: Color::White,
            bg: mark_bg(mark).unwrap_or(Color::Green),
        },
        Tile::Goal => Glyph {
            ch: 'G',
            fg: Color::White,
            bg: mark_bg(mark).unwrap_or(Color::Red),
        },
        Tile::Open(cost) => Glyph {
            ch: tile.to_char(),
            fg: if mark == Mark::None { cost_color(cost) } else { Color::White },
            bg,
        },
    }
}

/// Legend entries: sample glyph and description.
pub fn legend() -> Vec<(Glyph, &'static str)> {
    vec![
        (glyph(Tile::Start, Mark::None), "start"),
        (glyph(Tile::Goal, Mark::None), "goal"),
        (glyph(Tile::Wall, Mark::None), "wall"),
        (glyph(Tile::Open(4), Mark::None), "cost"),
        (glyph(Tile::Open(1), Mark::Enqueued), "enqueued"),
        (glyph(Tile::Open(1), Mark::Visited), "visited"),
        (glyph(Tile::Open(1), Mark::BestPath), "path"),
        (glyph(Tile::Open(1), Mark::ReversePath), "path from goal"),
    ]
}
