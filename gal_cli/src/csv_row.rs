use std::path::Path;

use gal_core::comparator::ComparisonReport;
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: [&str; 6] = [
    "Name",
    "Exact algorithm time",
    "Approximation algorithm time",
    "Accuracy",
    "Tolerance",
    "Iteration modifier",
];

/// One benchmark result as stored in the raw per-graph CSV files.
/// Times are in seconds, accuracy in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub name: String,
    pub exact_secs: f64,
    pub approximate_secs: f64,
    pub accuracy: f64,
    pub tolerance: f64,
    pub iteration_modifier: f64,
}

impl CsvRow {
    pub fn from_report(name: &str, report: &ComparisonReport, iteration_modifier: f64) -> Self {
        Self {
            name: name.to_string(),
            exact_secs: report.exact_elapsed.as_secs_f64(),
            approximate_secs: report.approximate_elapsed.as_secs_f64(),
            accuracy: report.accuracy,
            tolerance: report.tolerance,
            iteration_modifier,
        }
    }

    /// Writes the row without a header, raw files are merged by `aggregate`.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.serialize(self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, csv::Error> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)?
            .deserialize()
            .collect()
    }
}
