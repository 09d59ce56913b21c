use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::{
    csv_row::{CSV_HEADER, CsvRow},
    file_utils::read_folder_with_extension,
};

#[derive(Args)]
pub struct AggregateArgs {
    /// Batches to merge, read from `<input>/<batch>`
    #[arg(short, long, num_args = 1.., required = true)]
    batches: Vec<String>,

    #[arg(short, long, env = "GAL_CSV_DIR", default_value = "csv_data/raw")]
    input: PathBuf,

    #[arg(short, long, default_value = "csv_data/data.csv")]
    output: PathBuf,
}

/// Writes the CSV header followed by every row found under `<input>/<batch>`.
/// Returns the number of rows written.
pub fn aggregate(input: &Path, batches: &[String], output: &Path) -> Result<usize, anyhow::Error> {
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for batch in batches {
        let folder = input.join(batch);
        let files = read_folder_with_extension(&folder, "csv")
            .with_context(|| format!("Failed to read batch folder {}", folder.display()))?;

        for path in files {
            let records = CsvRow::read_from(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            for record in &records {
                writer.serialize(record)?;
            }
            rows += records.len();
        }
    }

    writer.flush()?;

    Ok(rows)
}

pub fn run(args: AggregateArgs) -> Result<(), anyhow::Error> {
    let rows = aggregate(&args.input, &args.batches, &args.output)?;
    info!("{} rows written into {}", rows, args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, accuracy: f64) -> CsvRow {
        CsvRow {
            name: name.to_string(),
            exact_secs: 2.0,
            approximate_secs: 0.5,
            accuracy,
            tolerance: 5.0,
            iteration_modifier: 0.3,
        }
    }

    fn read_aggregated(path: &Path) -> (Vec<String>, Vec<CsvRow>) {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        let mut records = reader.records().map(Result::unwrap);

        let header = records.next().unwrap().iter().map(String::from).collect();
        let rows = records
            .map(|record| record.deserialize(None).unwrap())
            .collect();
        (header, rows)
    }

    #[test]
    fn test_aggregate() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("raw");
        std::fs::create_dir_all(raw.join("batch1")).unwrap();
        std::fs::create_dir_all(raw.join("batch2")).unwrap();
        std::fs::create_dir_all(raw.join("ignored")).unwrap();
        row("a", 90.0).write_to(raw.join("batch1/a.csv")).unwrap();
        row("b", 95.0).write_to(raw.join("batch1/b.csv")).unwrap();
        std::fs::write(raw.join("batch1/notes.txt"), "skip me").unwrap();
        row("c", 99.0).write_to(raw.join("batch2/c.csv")).unwrap();
        row("d", 10.0).write_to(raw.join("ignored/d.csv")).unwrap();

        let output = dir.path().join("out/data.csv");
        let rows = aggregate(
            &raw,
            &[String::from("batch1"), String::from("batch2")],
            &output,
        )
        .unwrap();

        assert_eq!(rows, 3);
        let (header, records) = read_aggregated(&output);
        assert_eq!(header, CSV_HEADER);
        assert_eq!(
            records,
            vec![row("a", 90.0), row("b", 95.0), row("c", 99.0)]
        );
    }

    #[test]
    fn test_aggregate_keeps_quoted_names_intact() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("raw");
        std::fs::create_dir_all(raw.join("batch1")).unwrap();
        let name = "multi\n\nline, \"quoted\"";
        row(name, 50.0).write_to(raw.join("batch1/odd.csv")).unwrap();

        let output = dir.path().join("data.csv");
        let rows = aggregate(&raw, &[String::from("batch1")], &output).unwrap();

        assert_eq!(rows, 1);
        let (_, records) = read_aggregated(&output);
        assert_eq!(records, vec![row(name, 50.0)]);
    }

    #[test]
    fn test_aggregate_rejects_malformed_row() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("raw");
        std::fs::create_dir_all(raw.join("batch1")).unwrap();
        std::fs::write(raw.join("batch1/bad.csv"), "a,not-a-number\n").unwrap();

        let result = aggregate(&raw, &[String::from("batch1")], &dir.path().join("data.csv"));

        assert!(result.is_err());
    }

    #[test]
    fn test_aggregate_missing_batch() {
        let dir = tempfile::tempdir().unwrap();

        let result = aggregate(
            dir.path(),
            &[String::from("missing")],
            &dir.path().join("data.csv"),
        );

        assert!(result.is_err());
    }
}
