//! The `mazewalk` command: generate or load a maze, run a search strategy
//! on it, and animate the recorded trace in the terminal.

pub mod logging;

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path as FsPath, PathBuf};
use std::time::Duration;

use clap::Parser;
use rand::Rng;
use serde::Serialize;

use mazewalk_core::{Context, Maze, MazeError, Point};
use mazewalk_gen::{GenConfig, MazeGen};
use mazewalk_paths::{
    Outcome, Runner, SearchConfig, SearchError, Step, StepCost, Strategy, Trace, dijkstra_map,
};
use mazewalk_term::{TermConfig, TerminalSink};

/// Command-line options.
#[derive(Debug, Clone, Parser)]
#[command(name = "mazewalk", version, about = "Watch grid search strategies explore a maze")]
pub struct Args {
    /// Search strategy: bfs, dfs, dijkstra, ucs, astar or bidirectional.
    #[arg(short, long, default_value = "astar")]
    pub algo: Strategy,

    /// Rows of a generated maze.
    #[arg(long, default_value_t = 15)]
    pub rows: usize,

    /// Columns of a generated maze.
    #[arg(long, default_value_t = 25)]
    pub cols: usize,

    /// Fraction of wall cells in a generated maze.
    #[arg(long, default_value_t = 0.25)]
    pub walls: f64,

    /// Fraction of cost 3-5 cells in a generated maze.
    #[arg(long, default_value_t = 0.6)]
    pub weighted: f64,

    /// Seed for maze generation; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between animated search events, in milliseconds.
    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    /// A* counts every step as 1 instead of the entered cell's cost.
    #[arg(long)]
    pub unit_astar: bool,

    /// Only generate mazes where the goal is reachable.
    #[arg(long)]
    pub connected: bool,

    /// Load the maze from a file instead of generating one.
    #[arg(long)]
    pub maze: Option<PathBuf>,

    /// The maze file holds numeric codes (0 wall, 1 start, 2 goal, 3-5
    /// cost) instead of the text format.
    #[arg(long, requires = "maze")]
    pub codes: bool,

    /// Write the maze, outcome and event trace as JSON to this file.
    #[arg(long)]
    pub trace_json: Option<PathBuf>,

    /// Print the result without animating.
    #[arg(long)]
    pub no_animate: bool,

    /// Run every strategy and print a comparison table.
    #[arg(long, conflicts_with = "trace_json")]
    pub compare: bool,

    /// Log level, used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    pub log: String,

    /// Write logs to a file in this directory instead of stderr.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Generator settings from the flags.
    pub fn gen_config(&self) -> GenConfig {
        GenConfig {
            rows: self.rows,
            cols: self.cols,
            wall_ratio: self.walls,
            weighted_ratio: self.weighted,
            require_path: self.connected,
            ..GenConfig::default()
        }
    }

    /// Search settings from the flags.
    pub fn search_config(&self) -> SearchConfig {
        let step = if self.unit_astar {
            StepCost::Unit
        } else {
            StepCost::Weighted
        };
        SearchConfig::default().with_astar_step(step)
    }

    /// Animation settings from the flags.
    pub fn term_config(&self) -> TermConfig {
        TermConfig::default().with_delay(Duration::from_millis(self.delay_ms))
    }
}

/// Parse maze text, either in the text format or as rows of numeric codes
/// separated by commas or whitespace.
pub fn parse_maze(text: &str, codes: bool) -> Result<Maze, MazeError> {
    if !codes {
        return Maze::parse(text);
    }
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .enumerate()
                .map(|(col, s)| {
                    s.parse::<i32>()
                        .map_err(|_| MazeError::BadCode {
                            text: s.to_string(),
                            pos: Point::new(row as i32, col as i32),
                        })
                })
                .collect::<Result<Vec<i32>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Maze::from_codes(&rows)
}

fn load_maze(path: &FsPath, codes: bool) -> Result<Maze, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let maze = parse_maze(&text, codes)?;
    log::info!("loaded {}x{} maze from {}", maze.rows(), maze.cols(), path.display());
    Ok(maze)
}

/// The maze to search: loaded from `--maze` or generated.
pub fn build_maze(args: &Args) -> Result<Maze, Box<dyn std::error::Error>> {
    if let Some(path) = &args.maze {
        return load_maze(path, args.codes);
    }
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("generating maze with seed {seed}");
    Ok(MazeGen::seeded(seed).generate(&args.gen_config())?)
}

/// What one strategy did on one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub strategy: Strategy,
    pub path_len: Option<usize>,
    pub path_cost: Option<i32>,
    pub visited: usize,
    pub enqueued: usize,
    pub steps: usize,
}

impl RunStats {
    fn new(strategy: Strategy, maze: &Maze, outcome: &Outcome, trace: &Trace, steps: usize) -> Self {
        Self {
            strategy,
            path_len: outcome.path().map(|p| p.len()),
            path_cost: outcome.path().map(|p| p.cost(maze)),
            visited: trace.visited().count(),
            enqueued: trace.enqueued().count(),
            steps,
        }
    }
}

/// Run `strategy` to completion, recording its events.
pub fn record(
    strategy: Strategy,
    maze: &Maze,
    config: &SearchConfig,
    ctx: &Context,
) -> Result<(Outcome, Trace, RunStats), SearchError> {
    let mut trace = Trace::new();
    let mut runner = Runner::new(strategy, maze, maze.start(), maze.goal(), config, ctx.clone());
    let outcome = loop {
        if let Step::Done(outcome) = runner.step(&mut trace)? {
            break outcome;
        }
    };
    let stats = RunStats::new(strategy, maze, &outcome, &trace, runner.steps());
    Ok((outcome, trace, stats))
}

/// One-line description of a run, with the cheapest possible cost for
/// reference.
pub fn summary(maze: &Maze, stats: &RunStats) -> String {
    let best = dijkstra_map(maze, maze.bounds(), &[maze.start()]).get(maze.goal());
    match (stats.path_len, stats.path_cost) {
        (Some(len), Some(cost)) => format!(
            "{}: path of {len} cells, cost {cost} (cheapest {}), {} visited, {} steps",
            stats.strategy.label(),
            best.map_or_else(|| "-".to_string(), |b| b.to_string()),
            stats.visited,
            stats.steps
        ),
        _ => format!(
            "{}: no path, {} visited, {} steps",
            stats.strategy.label(),
            stats.visited,
            stats.steps
        ),
    }
}

/// Comparison table of every strategy on `maze`.
pub fn compare(maze: &Maze, config: &SearchConfig) -> Result<String, SearchError> {
    let mut out = format!(
        "{:<14} {:>6} {:>6} {:>8} {:>8} {:>6}\n",
        "strategy", "cells", "cost", "visited", "enqueued", "steps"
    );
    for s in Strategy::ALL {
        let (_, _, stats) = record(s, maze, config, &Context::new())?;
        let dash = || "-".to_string();
        out.push_str(&format!(
            "{:<14} {:>6} {:>6} {:>8} {:>8} {:>6}\n",
            s.name(),
            stats.path_len.map_or_else(dash, |v| v.to_string()),
            stats.path_cost.map_or_else(dash, |v| v.to_string()),
            stats.visited,
            stats.enqueued,
            stats.steps
        ));
    }
    Ok(out)
}

#[derive(Serialize)]
struct Report<'a> {
    strategy: Strategy,
    config: &'a SearchConfig,
    maze: &'a Maze,
    outcome: &'a Outcome,
    trace: &'a Trace,
}

fn write_report(
    path: &FsPath,
    strategy: Strategy,
    config: &SearchConfig,
    maze: &Maze,
    outcome: &Outcome,
    trace: &Trace,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut w = BufWriter::new(fs::File::create(path)?);
    let report = Report {
        strategy,
        config,
        maze,
        outcome,
        trace,
    };
    serde_json::to_writer_pretty(&mut w, &report)?;
    w.flush()?;
    log::info!("wrote {} events to {}", trace.len(), path.display());
    Ok(())
}

/// Replay `trace` into the terminal. Returns whether the replay ran to the
/// end.
fn animate(maze: &Maze, trace: &Trace, args: &Args, status: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let ctx = Context::new();
    let mut sink = TerminalSink::stdout(maze, args.term_config(), ctx.clone());
    sink.init()?;
    sink.status(&format!("{}  (q to stop)", args.algo.label()))?;
    let finished = match trace.replay(&mut sink, &ctx) {
        Ok(()) => true,
        Err(SearchError::Cancelled) => false,
        Err(err) => {
            sink.close();
            return Err(err.into());
        }
    };
    if let Some(err) = sink.take_error() {
        sink.close();
        return Err(err.into());
    }
    if finished {
        sink.status(&format!("{status}  (any key to exit)"))?;
        sink.wait_key()?;
    }
    sink.close();
    Ok(finished)
}

/// Run the command.
pub fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let maze = build_maze(args)?;
    let config = args.search_config();

    if args.compare {
        print!("{maze}\n\n{}", compare(&maze, &config)?);
        return Ok(());
    }

    // The search runs to completion first; the animation only replays it.
    let (outcome, trace, stats) = record(args.algo, &maze, &config, &Context::new())?;
    let line = summary(&maze, &stats);

    if let Some(path) = &args.trace_json {
        write_report(path, args.algo, &config, &maze, &outcome, &trace)?;
    }

    if args.no_animate {
        let mut out = io::stdout().lock();
        writeln!(out, "{maze}\n")?;
        writeln!(out, "{line}")?;
        if let Some(path) = outcome.path() {
            let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
            writeln!(out, "{}", cells.join(" "))?;
        }
        return Ok(());
    }

    if !animate(&maze, &trace, args, &line)? {
        println!("stopped");
        return Ok(());
    }
    println!("{line}");
    Ok(())
}
