//! Random weighted maze generation.
//!
//! A maze is built in three passes over an all-open grid of cost 1: place
//! the start and goal at distinct random cells, scatter walls over the
//! remaining cells, then give a share of the cells still open a cost of 3
//! to 5.

use mazewalk_core::{Maze, Tile};
use mazewalk_paths::connected;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GenConfig;
use crate::error::GenError;

/// Lowest and highest cost given to weighted cells.
const WEIGHTED_COSTS: std::ops::RangeInclusive<i32> = 3..=5;

/// Maze generator driven by a random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<StdRng> {
    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze. With `require_path`, layouts whose start and goal
    /// are disconnected are discarded and drawn again, up to
    /// `max_attempts` times.
    pub fn generate(&mut self, config: &GenConfig) -> Result<Maze, GenError> {
        validate(config)?;
        if !config.require_path {
            return self.layout(config);
        }
        for attempt in 1..=config.max_attempts {
            let maze = self.layout(config)?;
            if connected(&maze, maze.bounds(), maze.start(), maze.goal()) {
                log::debug!("connected maze after {attempt} attempt(s)");
                return Ok(maze);
            }
            log::debug!("attempt {attempt}: start and goal disconnected, retrying");
        }
        log::warn!("giving up after {} attempts", config.max_attempts);
        Err(GenError::NoPath {
            attempts: config.max_attempts,
        })
    }

    /// One random layout, connected or not.
    fn layout(&mut self, config: &GenConfig) -> Result<Maze, GenError> {
        let n = cells(config)?;
        let mut tiles = vec![Tile::Open(1); n];

        // Cells still free for walls or weights, drawn without replacement.
        let mut free: Vec<usize> = (0..n).collect();

        let start = self.take(&mut free);
        tiles[start] = Tile::Start;
        let goal = self.take(&mut free);
        tiles[goal] = Tile::Goal;

        let walls = share(n, config.wall_ratio).min(free.len());
        for _ in 0..walls {
            let i = self.take(&mut free);
            tiles[i] = Tile::Wall;
        }

        let weighted = share(n, config.weighted_ratio).min(free.len());
        for _ in 0..weighted {
            let i = self.take(&mut free);
            tiles[i] = Tile::Open(self.rng.random_range(WEIGHTED_COSTS));
        }

        let maze = Maze::new(config.rows, config.cols, tiles)?;
        log::trace!(
            "layout {}x{}: start {} goal {}, {walls} walls, {weighted} weighted",
            config.rows,
            config.cols,
            maze.start(),
            maze.goal()
        );
        Ok(maze)
    }

    /// Remove and return a random entry of `free`. `free` is never empty
    /// here: the counts drawn are capped by its length.
    fn take(&mut self, free: &mut Vec<usize>) -> usize {
        let k = self.rng.random_range(0..free.len());
        free.swap_remove(k)
    }
}

/// Number of cells covered by `ratio` of `n`, rounded up.
fn share(n: usize, ratio: f64) -> usize {
    (n as f64 * ratio).ceil() as usize
}

/// Number of cells of the configured grid. Every row, column and flat
/// index must fit an `i32` coordinate.
fn cells(config: &GenConfig) -> Result<usize, GenError> {
    config
        .rows
        .checked_mul(config.cols)
        .filter(|&n| n <= i32::MAX as usize)
        .ok_or(GenError::TooLarge {
            rows: config.rows,
            cols: config.cols,
        })
}

fn validate(config: &GenConfig) -> Result<(), GenError> {
    if cells(config)? < 2 {
        return Err(GenError::TooSmall {
            rows: config.rows,
            cols: config.cols,
        });
    }
    for (name, value) in [
        ("wall_ratio", config.wall_ratio),
        ("weighted_ratio", config.weighted_ratio),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(GenError::InvalidRatio { name, value });
        }
    }
    Ok(())
}
