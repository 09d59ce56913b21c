use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::{
    file_utils::read_folder_with_extension,
    parsers,
    run::{BenchmarkArgs, benchmark_file},
};

#[derive(Clone, Debug)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => *num,
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

#[derive(Args)]
pub struct BatchArgs {
    /// Name of the batch, graphs are read from `<datasets>/<batch_name>`
    #[arg(short, long)]
    batch_name: String,

    #[arg(long, env = "GAL_DATASETS_DIR", default_value = "autogen_datasets")]
    datasets: PathBuf,

    /// Raw CSV rows are written to `<csv_output>/<batch_name>`
    #[arg(long, env = "GAL_CSV_DIR", default_value = "csv_data/raw")]
    csv_output: PathBuf,

    #[command(flatten)]
    benchmark: BenchmarkArgs,

    /// Number of graphs benchmarked concurrently ("auto" uses every CPU)
    #[arg(long, default_value = "auto", value_parser = parsers::parse_threads)]
    threads: Threads,
}

pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

pub fn run_batch(
    graphs: &[PathBuf],
    output_folder: &Path,
    benchmark: &BenchmarkArgs,
    threads: &Threads,
) -> Result<BatchSummary, anyhow::Error> {
    let params = benchmark.params();
    params.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.number_of_threads())
        .build()?;

    let bar = ProgressBar::new(graphs.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} ({elapsed})")?);

    // Every graph gets its own matrix, nothing is shared between runs
    let failed = pool.install(|| {
        graphs
            .par_iter()
            .filter(|graph| {
                let result = benchmark_file(graph, &params, Some(output_folder));
                bar.inc(1);

                match result {
                    Ok(_) => false,
                    Err(err) => {
                        error!("{:#}", err);
                        true
                    }
                }
            })
            .count()
    });

    bar.finish_and_clear();

    Ok(BatchSummary {
        succeeded: graphs.len() - failed,
        failed,
    })
}

pub fn run(args: BatchArgs) -> Result<(), anyhow::Error> {
    let input_folder = args.datasets.join(&args.batch_name);
    let output_folder = args.csv_output.join(&args.batch_name);

    let graphs = read_folder_with_extension(&input_folder, "txt")
        .with_context(|| format!("Failed to read dataset folder {}", input_folder.display()))?;

    info!(
        "Benchmarking {} graphs from {} on {} threads",
        graphs.len(),
        input_folder.display(),
        args.threads.number_of_threads()
    );

    std::fs::create_dir_all(&output_folder)?;
    let summary = run_batch(&graphs, &output_folder, &args.benchmark, &args.threads)?;

    if summary.failed > 0 {
        warn!(
            "{} of {} graphs failed",
            summary.failed,
            summary.succeeded + summary.failed
        );
    }

    info!(
        "{} results were written into {}",
        summary.succeeded,
        output_folder.display()
    );

    Ok(())
}
