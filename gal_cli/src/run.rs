use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use comfy_table::Table;
use gal_core::{
    benchmark::{BenchmarkOutcome, BenchmarkParams, run_benchmark},
    comparator::ComparisonReport,
    matrix_io::{read_matrix, write_matrix},
};
use tracing::info;

use crate::{csv_row::CsvRow, parsers};

#[derive(Args, Clone, Debug)]
pub struct BenchmarkArgs {
    /// Sample count of the approximation, as a fraction of the node count
    #[arg(short, long, env = "GAL_ITERATION_MODIFIER", default_value_t = 0.5, value_parser = parsers::parse_iteration_modifier)]
    iteration_modifier: f64,

    /// Maximum absolute difference for a cell to count as accurate
    #[arg(short, long, env = "GAL_TOLERANCE", default_value_t = 5.0, value_parser = parsers::parse_tolerance)]
    tolerance: f64,

    /// Seed of the approximation, runs are not reproducible without it
    #[arg(short, long, env = "GAL_SEED")]
    seed: Option<u64>,
}

impl BenchmarkArgs {
    pub fn params(&self) -> BenchmarkParams {
        BenchmarkParams {
            iteration_modifier: self.iteration_modifier,
            tolerance: self.tolerance,
            seed: self.seed,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args)]
pub struct RunArgs {
    /// Adjacency matrix of the graph to benchmark
    #[arg(short, long)]
    graph: PathBuf,

    /// Folder receiving the raw CSV row of this run
    #[arg(long)]
    csv_output: Option<PathBuf>,

    #[command(flatten)]
    benchmark: BenchmarkArgs,

    /// Where to save the exact distance matrix
    #[arg(long)]
    exact_output: Option<PathBuf>,

    /// Where to save the approximate distance matrix
    #[arg(long)]
    approx_output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

pub fn graph_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn csv_file_name(name: &str, params: &BenchmarkParams) -> String {
    format!(
        "{name}_im{}_tol{}.csv",
        params.iteration_modifier, params.tolerance
    )
}

/// Loads `graph`, benchmarks it and, when `csv_output` is set, writes its CSV row.
pub fn benchmark_file(
    graph: &Path,
    params: &BenchmarkParams,
    csv_output: Option<&Path>,
) -> Result<BenchmarkOutcome, anyhow::Error> {
    let matrix =
        read_matrix(graph).with_context(|| format!("Failed to load graph {}", graph.display()))?;
    let outcome = run_benchmark(&matrix, params)
        .with_context(|| format!("Failed to benchmark {}", graph.display()))?;

    if let Some(folder) = csv_output {
        let name = graph_name(graph);
        let row = CsvRow::from_report(&name, &outcome.report, params.iteration_modifier);

        std::fs::create_dir_all(folder)?;
        let path = folder.join(csv_file_name(&name, params));
        row.write_to(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(outcome)
}

fn report_table(report: &ComparisonReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Nodes".to_string(), report.num_nodes.to_string()]);
    table.add_row(vec![
        "Exact time".to_string(),
        format!("{:?}", report.exact_elapsed),
    ]);
    table.add_row(vec![
        "Approximate time".to_string(),
        format!("{:?}", report.approximate_elapsed),
    ]);
    table.add_row(vec!["Speed-up".to_string(), report.speed_up.to_string()]);
    table.add_row(vec![
        "Accuracy".to_string(),
        format!("{:.2}%", report.accuracy),
    ]);
    table.add_row(vec!["Tolerance".to_string(), report.tolerance.to_string()]);
    table
}

pub fn run(args: RunArgs) -> Result<(), anyhow::Error> {
    let params = args.benchmark.params();
    info!("Benchmarking {:?} with {:?}", args.graph, params);

    let outcome = benchmark_file(&args.graph, &params, args.csv_output.as_deref())?;

    if let Some(path) = &args.exact_output {
        write_matrix(path, outcome.exact.matrix())?;
        info!("Exact distances saved to {}", path.display());
    }

    if let Some(path) = &args.approx_output {
        write_matrix(path, outcome.approximate.matrix())?;
        info!("Approximate distances saved to {}", path.display());
    }

    match args.format {
        OutputFormat::Table => println!("{}", report_table(&outcome.report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome.report)?),
    }

    Ok(())
}
