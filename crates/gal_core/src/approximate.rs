use fixedbitset::FixedBitSet;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::{
    algorithm::{AlgorithmResult, ShortestPathAlgorithm, prepare_working_copy},
    distance_matrix::DistanceMatrix,
    error::{GalError, Result},
    stopwatch::Stopwatch,
};

/// Randomized variant of [`FloydWarshall`](crate::exact::FloydWarshall).
///
/// Instead of relaxing through every node, it performs
/// `floor(n * iteration_modifier)` relaxation passes, each through a node drawn
/// uniformly at random (with replacement). This runs in
/// O(num_samples * n²) and trades accuracy for throughput.
pub struct ApproximateFloydWarshall<R = SmallRng> {
    iteration_modifier: f64,
    rng: R,
}

impl ApproximateFloydWarshall<SmallRng> {
    /// A `None` seed draws the generator state from the thread RNG, so the run
    /// is not reproducible.
    pub fn new(iteration_modifier: f64, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        Self::with_rng(iteration_modifier, rng)
    }
}

impl<R: Rng> ApproximateFloydWarshall<R> {
    pub fn with_rng(iteration_modifier: f64, rng: R) -> Result<Self> {
        if !iteration_modifier.is_finite() || iteration_modifier <= 0.0 {
            return Err(GalError::InvalidIterationModifier(iteration_modifier));
        }

        Ok(Self {
            iteration_modifier,
            rng,
        })
    }

    pub fn iteration_modifier(&self) -> f64 {
        self.iteration_modifier
    }

    /// `floor(num_nodes * iteration_modifier)`. Fails when the count does not
    /// fit in a `usize`, since the cast would saturate.
    pub fn num_samples(&self, num_nodes: usize) -> Result<usize> {
        let num_samples = (num_nodes as f64 * self.iteration_modifier).floor();
        if num_samples >= usize::MAX as f64 {
            return Err(GalError::InvalidIterationModifier(self.iteration_modifier));
        }

        Ok(num_samples as usize)
    }
}

impl<R: Rng> ShortestPathAlgorithm for ApproximateFloydWarshall<R> {
    fn name(&self) -> &'static str {
        "approximate_floyd_warshall"
    }

    fn calc_distances(&mut self, input: &DistanceMatrix) -> Result<AlgorithmResult> {
        let num_samples = self.num_samples(input.num_nodes())?;
        let mut distances = prepare_working_copy(input, self.name());
        let num_nodes = distances.num_nodes();
        let mut sampled = FixedBitSet::with_capacity(num_nodes);

        let stopwatch = Stopwatch::new(self.name());
        for _ in 0..num_samples {
            let k = self.rng.random_range(0..num_nodes);
            sampled.insert(k);
            distances.relax_through(k);
        }
        let elapsed = stopwatch.report();

        let intermediate_nodes = sampled.count_ones(..);
        debug!(
            num_nodes,
            num_samples, intermediate_nodes, "Approximate relaxation done"
        );

        Ok(AlgorithmResult::new(distances, elapsed, intermediate_nodes))
    }
}
