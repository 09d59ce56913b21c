use crate::{
    algorithm::{AlgorithmResult, ShortestPathAlgorithm, prepare_working_copy},
    distance_matrix::DistanceMatrix,
    error::Result,
    stopwatch::Stopwatch,
};

/// Exact all-pairs shortest paths, O(n³).
///
/// The intermediate node `k` must stay the outermost loop: each pass extends
/// the set of allowed intermediate nodes for every pair at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

impl FloydWarshall {
    pub fn new() -> Self {
        Self
    }
}

impl ShortestPathAlgorithm for FloydWarshall {
    fn name(&self) -> &'static str {
        "floyd_warshall"
    }

    fn calc_distances(&mut self, input: &DistanceMatrix) -> Result<AlgorithmResult> {
        let mut distances = prepare_working_copy(input, self.name());
        let num_nodes = distances.num_nodes();

        let stopwatch = Stopwatch::new(self.name());
        for k in 0..num_nodes {
            distances.relax_through(k);
        }
        let elapsed = stopwatch.report();

        Ok(AlgorithmResult::new(distances, elapsed, num_nodes))
    }
}
