//! Strategy selection and dispatch.

use std::fmt;
use std::str::FromStr;

use mazewalk_core::Point;

use crate::astar::AStar;
use crate::best_first::BestFirst;
use crate::bfs::Bfs;
use crate::bidirectional::Bidirectional;
use crate::config::SearchConfig;
use crate::dfs::Dfs;
use crate::error::SearchError;
use crate::event::Sink;
use crate::search::{Outcome, Search, Step};
use crate::traits::AstarPather;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    Bfs,
    Dfs,
    Dijkstra,
    Ucs,
    AStar,
    Bidirectional,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 6] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Dijkstra,
        Strategy::Ucs,
        Strategy::AStar,
        Strategy::Bidirectional,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Dijkstra => "dijkstra",
            Strategy::Ucs => "ucs",
            Strategy::AStar => "astar",
            Strategy::Bidirectional => "bidirectional",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "Breadth-First Search",
            Strategy::Dfs => "Depth-First Search",
            Strategy::Dijkstra => "Dijkstra's Algorithm",
            Strategy::Ucs => "Uniform-Cost Search",
            Strategy::AStar => "A* Search",
            Strategy::Bidirectional => "Bidirectional Search",
        }
    }

    /// Whether the strategy returns a cheapest path on weighted grids
    /// under `config`.
    pub fn is_cost_optimal(self, config: &SearchConfig) -> bool {
        match self {
            Strategy::Dijkstra | Strategy::Ucs => true,
            Strategy::AStar => config.astar_step == crate::StepCost::Weighted,
            Strategy::Bfs | Strategy::Dfs | Strategy::Bidirectional => false,
        }
    }

    /// Build the search engine for this strategy.
    pub fn engine<'a, P: AstarPather>(
        self,
        pather: &'a P,
        from: Point,
        to: Point,
        config: &SearchConfig,
    ) -> Engine<'a, P> {
        match self {
            Strategy::Bfs => Engine::Bfs(Bfs::bfs(pather, from, to)),
            Strategy::Dfs => Engine::Dfs(Dfs::dfs(pather, from, to)),
            Strategy::Dijkstra => Engine::BestFirst(BestFirst::dijkstra(pather, from, to)),
            Strategy::Ucs => Engine::BestFirst(BestFirst::ucs(pather, from, to)),
            Strategy::AStar => Engine::BestFirst(AStar::astar(pather, from, to, config.astar_step)),
            Strategy::Bidirectional => Engine::Bidirectional(Bidirectional::new(pather, from, to)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "ucs" => Ok(Strategy::Ucs),
            "astar" | "a-star" | "a*" => Ok(Strategy::AStar),
            "bidirectional" => Ok(Strategy::Bidirectional),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// A running search of any strategy.
pub enum Engine<'a, P> {
    Bfs(Bfs<'a, P>),
    Dfs(Dfs<'a, P>),
    BestFirst(BestFirst<'a, P>),
    Bidirectional(Bidirectional<'a, P>),
}

impl<P: AstarPather> Search for Engine<'_, P> {
    fn step(&mut self, sink: &mut dyn Sink) -> Step {
        match self {
            Engine::Bfs(s) => s.step(sink),
            Engine::Dfs(s) => s.step(sink),
            Engine::BestFirst(s) => s.step(sink),
            Engine::Bidirectional(s) => s.step(sink),
        }
    }

    fn complete(&mut self, sink: &mut dyn Sink) -> Option<Outcome> {
        match self {
            Engine::Bfs(s) => s.complete(sink),
            Engine::Dfs(s) => s.complete(sink),
            Engine::BestFirst(s) => s.complete(sink),
            Engine::Bidirectional(s) => s.complete(sink),
        }
    }

    fn steps(&self) -> usize {
        match self {
            Engine::Bfs(s) => s.steps(),
            Engine::Dfs(s) => s.steps(),
            Engine::BestFirst(s) => s.steps(),
            Engine::Bidirectional(s) => s.steps(),
        }
    }
}
