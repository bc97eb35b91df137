//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single-graph generator run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Edge probability, or edges per node for preferential attachment.
    pub density: f64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.node_count, self.density)
    }
}

/// Parameters for a multi-group generator run.
#[derive(Clone, Debug)]
pub struct GroupsBenchParams {
    /// Size of every group.
    pub group_size: usize,
    /// Number of groups.
    pub group_count: usize,
    /// Upper bound on edges between each pair of groups.
    pub max_connections: usize,
}

impl GroupsBenchParams {
    /// Expands into the per-group size list the generator expects.
    #[must_use]
    pub fn group_sizes(&self) -> Vec<usize> {
        vec![self.group_size; self.group_count]
    }
}

impl fmt::Display for GroupsBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "groups={}x{},max={}",
            self.group_count, self.group_size, self.max_connections
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{GraphBenchParams, GroupsBenchParams};

    #[rstest]
    fn labels_are_compact() {
        let graph = GraphBenchParams {
            node_count: 100,
            density: 0.5,
        };
        assert_eq!(graph.to_string(), "n=100,d=0.5");

        let groups = GroupsBenchParams {
            group_size: 20,
            group_count: 3,
            max_connections: 2,
        };
        assert_eq!(groups.to_string(), "groups=3x20,max=2");
        assert_eq!(groups.group_sizes(), vec![20, 20, 20]);
    }
}
