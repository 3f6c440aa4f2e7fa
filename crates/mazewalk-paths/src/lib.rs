//! Steppable search strategies for mazes.
//!
//! Six strategies share a few building blocks:
//!
//! - **BFS** and **DFS**: one frontier-generic [`Traversal`] over a FIFO
//!   queue ([`Bfs`]) or a LIFO stack ([`Dfs`])
//! - **Dijkstra**, **UCS** and **A\***: one cost-ordered [`BestFirst`]
//!   engine over a stable [`PriorityFrontier`]
//! - **Bidirectional** BFS: [`Bidirectional`]
//!
//! Every engine implements [`Search`]: each [`step`](Search::step) performs
//! one expansion round and reports the touched cells to a [`Sink`], and
//! [`complete`](Search::complete) reports the path once the goal is reached. A
//! [`Runner`] adds cooperative cancellation through a
//! [`Context`](mazewalk_core::Context), and [`run_search`] is the one-call
//! entry point.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, bidirectional, [`bfs_map`], [`reachable`] |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra, UCS, [`dijkstra_map`] |
//! | [`AstarPather`] : [`WeightedPather`] | A*, [`Strategy::engine`] |
//!
//! [`Maze`](mazewalk_core::Maze) implements all three.

mod astar;
mod best_first;
mod bfs;
mod bidirectional;
mod cc;
mod config;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod event;
mod frontier;
mod maps;
mod maze;
mod path;
mod run;
mod search;
mod strategy;
mod traits;
mod traverse;

#[cfg(test)]
mod properties;

pub use astar::AStar;
pub use best_first::BestFirst;
pub use bfs::Bfs;
pub use bidirectional::Bidirectional;
pub use cc::{connected, reachable};
pub use config::{SearchConfig, StepCost};
pub use dfs::Dfs;
pub use dijkstra::{Dijkstra, Ucs};
pub use distance::manhattan;
pub use error::SearchError;
pub use event::{NullSink, SearchEvent, Sink, Trace};
pub use frontier::{Fifo, Frontier, Lifo, PriorityFrontier};
pub use maps::{DistanceMap, UNREACHABLE, bfs_map, dijkstra_map};
pub use path::{Path, PredMap, reconstruct, reconstruct_bidirectional};
pub use run::{Runner, run_search, run_search_with};
pub use search::{Outcome, Search, Step};
pub use strategy::{Engine, Strategy};
pub use traits::{AstarPather, Pather, WeightedPather};
pub use traverse::Traversal;
