/// How A* advances its g-score along an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepCost {
    /// Entering a cell costs that cell's cost, like Dijkstra and UCS.
    #[default]
    Weighted,
    /// Every step costs 1 regardless of the cell (the classic visualizer
    /// behaviour; paths are shortest in steps, not in cost).
    Unit,
}

/// Tunables shared by all strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Edge cost model used by A*.
    pub astar_step: StepCost,
}

impl SearchConfig {
    /// Config with the given A* step cost.
    pub fn with_astar_step(mut self, step: StepCost) -> Self {
        self.astar_step = step;
        self
    }
}
