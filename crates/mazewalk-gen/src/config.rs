/// Parameters of a generated maze.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Fraction of cells turned into walls, in `[0, 1]`.
    pub wall_ratio: f64,
    /// Fraction of cells given a cost of 3 to 5, in `[0, 1]`. Limited by
    /// the open cells left after walls are placed.
    pub weighted_ratio: f64,
    /// Retry until the start and goal are connected.
    pub require_path: bool,
    /// Attempts before giving up when `require_path` is set.
    pub max_attempts: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 25,
            wall_ratio: 0.25,
            weighted_ratio: 0.6,
            require_path: false,
            max_attempts: 100,
        }
    }
}

impl GenConfig {
    /// Default config with the given size.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let c: GenConfig = serde_json::from_str(r#"{"rows": 8, "require_path": true}"#).unwrap();
        assert_eq!(c.rows, 8);
        assert_eq!(c.cols, 25);
        assert!(c.require_path);
        assert_eq!(c.max_attempts, 100);
    }
}
