use std::time::Duration;

use crate::{distance_matrix::DistanceMatrix, error::Result};

/// Output of a single engine run. Only the computation is timed, not I/O.
#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    matrix: DistanceMatrix,
    elapsed: Duration,
    intermediate_nodes: usize,
}

impl AlgorithmResult {
    pub fn new(matrix: DistanceMatrix, elapsed: Duration, intermediate_nodes: usize) -> Self {
        Self {
            matrix,
            elapsed,
            intermediate_nodes,
        }
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> DistanceMatrix {
        self.matrix
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of distinct nodes the engine relaxed through.
    pub fn intermediate_nodes(&self) -> usize {
        self.intermediate_nodes
    }

    pub fn num_nodes(&self) -> usize {
        self.matrix.num_nodes()
    }
}

pub trait ShortestPathAlgorithm {
    fn name(&self) -> &'static str;

    /// Computes all-pairs distances on a private copy of `input`.
    fn calc_distances(&mut self, input: &DistanceMatrix) -> Result<AlgorithmResult>;
}

/// Copies `input` and zeroes its diagonal so relaxation passes can run in place.
pub(crate) fn prepare_working_copy(input: &DistanceMatrix, algorithm: &str) -> DistanceMatrix {
    let mut working = input.clone();
    let normalized = working.normalize_diagonal();
    if normalized > 0 {
        tracing::warn!(
            algorithm,
            normalized,
            "Input had non-zero diagonal entries, forcing them to zero"
        );
    }
    working
}
