use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::distance_matrix::DistanceMatrix;

const INF: f64 = f64::INFINITY;

/// Undirected random graph with integer weights in `1..=max_weight`.
pub fn random_graph(
    num_nodes: usize,
    edge_probability: f64,
    max_weight: u32,
    seed: u64,
) -> DistanceMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut rows = vec![vec![INF; num_nodes]; num_nodes];

    for (i, row) in rows.iter_mut().enumerate() {
        row[i] = 0.0;
    }

    for i in 0..num_nodes {
        for j in (i + 1)..num_nodes {
            if rng.random_bool(edge_probability) {
                let weight = rng.random_range(1..=max_weight) as f64;
                rows[i][j] = weight;
                rows[j][i] = weight;
            }
        }
    }

    DistanceMatrix::from_rows(rows).unwrap()
}

pub fn four_node_graph() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0.0, 1.0, 4.0, INF],
        vec![1.0, 0.0, 2.0, 5.0],
        vec![4.0, 2.0, 0.0, 1.0],
        vec![INF, 5.0, 1.0, 0.0],
    ])
    .unwrap()
}
