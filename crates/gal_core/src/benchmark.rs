use tracing::info;

use crate::{
    algorithm::{AlgorithmResult, ShortestPathAlgorithm},
    approximate::ApproximateFloydWarshall,
    comparator::{ComparisonReport, compare},
    distance_matrix::DistanceMatrix,
    error::{GalError, Result},
    exact::FloydWarshall,
};

#[derive(Clone, Debug)]
pub struct BenchmarkParams {
    /// Fraction of `n` used as the approximate sample count.
    pub iteration_modifier: f64,
    /// Maximum absolute per-cell difference counted as accurate.
    pub tolerance: f64,
    pub seed: Option<u64>,
}

impl Default for BenchmarkParams {
    fn default() -> Self {
        Self {
            iteration_modifier: 0.5,
            tolerance: 5.0,
            seed: None,
        }
    }
}

impl BenchmarkParams {
    pub fn validate(&self) -> Result<()> {
        if !self.iteration_modifier.is_finite() || self.iteration_modifier <= 0.0 {
            return Err(GalError::InvalidIterationModifier(self.iteration_modifier));
        }

        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(GalError::InvalidTolerance(self.tolerance));
        }

        Ok(())
    }
}

pub struct BenchmarkOutcome {
    pub exact: AlgorithmResult,
    pub approximate: AlgorithmResult,
    pub report: ComparisonReport,
}

/// Runs both engines on their own copy of `matrix` and compares the results.
pub fn run_benchmark(matrix: &DistanceMatrix, params: &BenchmarkParams) -> Result<BenchmarkOutcome> {
    params.validate()?;

    let mut approximate_algorithm =
        ApproximateFloydWarshall::new(params.iteration_modifier, params.seed)?;
    approximate_algorithm.num_samples(matrix.num_nodes())?;

    let exact = FloydWarshall::new().calc_distances(matrix)?;
    let approximate = approximate_algorithm.calc_distances(matrix)?;
    let report = compare(&exact, &approximate, params.tolerance)?;

    info!(
        num_nodes = report.num_nodes,
        accuracy = report.accuracy,
        speed_up = %report.speed_up,
        "Benchmark finished"
    );

    Ok(BenchmarkOutcome {
        exact,
        approximate,
        report,
    })
}
