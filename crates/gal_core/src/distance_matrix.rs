use crate::error::{GalError, Result};

/// Dense `n x n` matrix of path weights.
///
/// Values are stored in a flat row-major vector. To find the index for a pair
/// of nodes, use `index = from * num_nodes + to`. `f64::INFINITY` means that no
/// edge (or no path) is known between the two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    values: Vec<f64>,
    num_nodes: usize,
}

fn validate_value(row: usize, column: usize, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(GalError::InvalidValue { row, column, value });
    }

    Ok(())
}

impl DistanceMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let num_nodes = rows.len();
        if num_nodes == 0 {
            return Err(GalError::EmptyMatrix);
        }

        let mut values = Vec::with_capacity(num_nodes * num_nodes);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_nodes {
                return Err(GalError::NotSquare {
                    row: i,
                    expected: num_nodes,
                    found: row.len(),
                });
            }

            for (j, &value) in row.iter().enumerate() {
                validate_value(i, j, value)?;
            }

            values.extend(row);
        }

        Ok(Self { values, num_nodes })
    }

    pub fn from_flat(num_nodes: usize, values: Vec<f64>) -> Result<Self> {
        if num_nodes == 0 {
            return Err(GalError::EmptyMatrix);
        }

        if values.len() != num_nodes * num_nodes {
            return Err(GalError::NotSquare {
                row: values.len() / num_nodes,
                expected: num_nodes,
                found: values.len() % num_nodes,
            });
        }

        for (index, &value) in values.iter().enumerate() {
            validate_value(index / num_nodes, index % num_nodes, value)?;
        }

        Ok(Self { values, num_nodes })
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_nodes + to
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[self.index(from, to)]
    }

    #[inline(always)]
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        let index = self.index(from, to);
        self.values[index] = value;
    }

    pub fn row(&self, from: usize) -> &[f64] {
        let start = self.index(from, 0);
        &self.values[start..start + self.num_nodes]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.num_nodes)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.num_nodes)
            .all(|i| (i + 1..self.num_nodes).all(|j| self.get(i, j) == self.get(j, i)))
    }

    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.num_nodes).all(|i| self.get(i, i) == 0.0)
    }

    /// Forces every diagonal entry to zero, returning how many were changed.
    pub fn normalize_diagonal(&mut self) -> usize {
        let mut changed = 0;
        for i in 0..self.num_nodes {
            if self.get(i, i) != 0.0 {
                self.set(i, i, 0.0);
                changed += 1;
            }
        }
        changed
    }

    /// One relaxation pass through the intermediate node `k`:
    /// `dist[i][j] = min(dist[i][j], dist[i][k] + dist[k][j])` for every pair.
    ///
    /// Row `k` and column `k` cannot improve during the pass because
    /// `dist[k][k]` is zero, so updating in place reads consistent values.
    pub fn relax_through(&mut self, k: usize) {
        let n = self.num_nodes;
        for i in 0..n {
            let dist_ik = self.values[i * n + k];
            if dist_ik == f64::INFINITY {
                continue;
            }

            for j in 0..n {
                // inf + x stays inf for any non-negative x
                let through_k = dist_ik + self.values[k * n + j];
                let current = &mut self.values[i * n + j];
                if through_k < *current {
                    *current = through_k;
                }
            }
        }
    }
}
