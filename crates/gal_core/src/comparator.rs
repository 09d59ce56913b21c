use std::{fmt, time::Duration};

use serde::{Serialize, Serializer};

use crate::{
    algorithm::AlgorithmResult,
    error::{GalError, Result},
};

/// How much faster the approximation ran than the exact computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedUp {
    /// `exact elapsed / approximate elapsed`, may be below 1.
    Ratio(f64),
    /// The approximate run was too fast for the clock to resolve.
    Unmeasurable,
}

impl SpeedUp {
    pub fn from_durations(exact: Duration, approximate: Duration) -> Self {
        if approximate.is_zero() {
            return SpeedUp::Unmeasurable;
        }

        SpeedUp::Ratio(exact.as_secs_f64() / approximate.as_secs_f64())
    }

    pub fn ratio(&self) -> Option<f64> {
        match self {
            SpeedUp::Ratio(ratio) => Some(*ratio),
            SpeedUp::Unmeasurable => None,
        }
    }
}

impl fmt::Display for SpeedUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedUp::Ratio(ratio) => write!(f, "{ratio:.2}x"),
            SpeedUp::Unmeasurable => write!(f, "unmeasurable"),
        }
    }
}

impl Serialize for SpeedUp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SpeedUp::Ratio(ratio) => serializer.serialize_f64(*ratio),
            SpeedUp::Unmeasurable => serializer.serialize_str("unmeasurable"),
        }
    }
}

fn serialize_secs<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub num_nodes: usize,
    /// Percentage of cells within tolerance, in `[0, 100]`.
    pub accuracy: f64,
    pub tolerance: f64,
    #[serde(rename = "exact_elapsed_secs", serialize_with = "serialize_secs")]
    pub exact_elapsed: Duration,
    #[serde(rename = "approximate_elapsed_secs", serialize_with = "serialize_secs")]
    pub approximate_elapsed: Duration,
    pub speed_up: SpeedUp,
}

#[inline]
fn within_tolerance(exact: f64, approximate: f64, tolerance: f64) -> bool {
    // An infinite cell only matches the same infinity, even with an infinite tolerance
    if exact.is_infinite() || approximate.is_infinite() {
        return exact == approximate;
    }

    (exact - approximate).abs() <= tolerance
}

pub fn compare(
    exact: &AlgorithmResult,
    approximate: &AlgorithmResult,
    tolerance: f64,
) -> Result<ComparisonReport> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(GalError::InvalidTolerance(tolerance));
    }

    let num_nodes = exact.num_nodes();
    if num_nodes != approximate.num_nodes() {
        return Err(GalError::DimensionMismatch {
            left: num_nodes,
            right: approximate.num_nodes(),
        });
    }

    let matching = exact
        .matrix()
        .values()
        .iter()
        .zip(approximate.matrix().values())
        .filter(|&(&e, &a)| within_tolerance(e, a, tolerance))
        .count();

    let accuracy = matching as f64 / (num_nodes * num_nodes) as f64 * 100.0;

    Ok(ComparisonReport {
        num_nodes,
        accuracy,
        tolerance,
        exact_elapsed: exact.elapsed(),
        approximate_elapsed: approximate.elapsed(),
        speed_up: SpeedUp::from_durations(exact.elapsed(), approximate.elapsed()),
    })
}

#[cfg(test)]
mod tests {
    use crate::{distance_matrix::DistanceMatrix, error::ErrorKind};

    use super::*;

    const INF: f64 = f64::INFINITY;

    fn result(rows: Vec<Vec<f64>>, millis: u64) -> AlgorithmResult {
        AlgorithmResult::new(
            DistanceMatrix::from_rows(rows).unwrap(),
            Duration::from_millis(millis),
            0,
        )
    }

    #[test]
    fn test_identical_matrices() {
        let rows = vec![vec![0.0, 1.5, INF], vec![1.5, 0.0, 3.0], vec![INF, 3.0, 0.0]];
        let exact = result(rows.clone(), 10);
        let approximate = result(rows, 5);

        for tolerance in [0.0, 0.5, 100.0] {
            let report = compare(&exact, &approximate, tolerance).unwrap();
            assert_eq!(report.accuracy, 100.0);
        }
    }

    #[test]
    fn test_tolerance() {
        let exact = result(vec![vec![0.0, 4.0], vec![4.0, 0.0]], 10);
        let approximate = result(vec![vec![0.0, 9.0], vec![6.0, 0.0]], 10);

        assert_eq!(compare(&exact, &approximate, 0.0).unwrap().accuracy, 50.0);
        assert_eq!(compare(&exact, &approximate, 2.0).unwrap().accuracy, 75.0);
        assert_eq!(compare(&exact, &approximate, 5.0).unwrap().accuracy, 100.0);
    }

    #[test]
    fn test_infinity_never_within_tolerance_of_finite() {
        let exact = result(vec![vec![0.0, 4.0], vec![4.0, 0.0]], 10);
        let approximate = result(vec![vec![0.0, INF], vec![INF, 0.0]], 10);

        let report = compare(&exact, &approximate, f64::MAX).unwrap();
        assert_eq!(report.accuracy, 50.0);
    }

    #[test]
    fn test_infinite_tolerance_keeps_unreachable_cells_apart() {
        let exact = result(vec![vec![0.0, 4.0], vec![4.0, INF]], 10);
        let approximate = result(vec![vec![0.0, INF], vec![INF, INF]], 10);

        let report = compare(&exact, &approximate, f64::INFINITY).unwrap();
        assert_eq!(report.accuracy, 50.0);
    }

    #[test]
    fn test_speed_up() {
        let exact = result(vec![vec![0.0]], 30);
        let approximate = result(vec![vec![0.0]], 10);

        let report = compare(&exact, &approximate, 0.0).unwrap();
        let ratio = report.speed_up.ratio().unwrap();
        assert!((ratio - 3.0).abs() < 1e-9);
        assert_eq!(report.exact_elapsed, Duration::from_millis(30));
    }

    #[test]
    fn test_speed_up_unmeasurable() {
        let exact = result(vec![vec![0.0]], 30);
        let approximate = result(vec![vec![0.0]], 0);

        let report = compare(&exact, &approximate, 0.0).unwrap();
        assert_eq!(report.speed_up, SpeedUp::Unmeasurable);
        assert_eq!(report.speed_up.to_string(), "unmeasurable");
    }

    #[test]
    fn test_dimension_mismatch() {
        let exact = result(vec![vec![0.0]], 1);
        let approximate = result(vec![vec![0.0, 1.0], vec![1.0, 0.0]], 1);

        let error = compare(&exact, &approximate, 0.0).unwrap_err();
        assert!(matches!(
            error,
            GalError::DimensionMismatch { left: 1, right: 2 }
        ));
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_negative_tolerance() {
        let exact = result(vec![vec![0.0]], 1);

        let error = compare(&exact, &exact, -1.0).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_serialize() {
        let exact = result(vec![vec![0.0]], 2000);
        let approximate = result(vec![vec![0.0]], 0);

        let json = serde_json::to_value(compare(&exact, &approximate, 1.0).unwrap()).unwrap();
        assert_eq!(json["accuracy"], 100.0);
        assert_eq!(json["exact_elapsed_secs"], 2.0);
        assert_eq!(json["speed_up"], "unmeasurable");
    }
}
