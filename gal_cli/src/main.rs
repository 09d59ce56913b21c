use clap::{Parser, Subcommand};

#[cfg(not(feature = "dhat-heap"))]
use mimalloc::MiMalloc;

use crate::{aggregate::AggregateArgs, batch::BatchArgs, run::RunArgs};

mod aggregate;
mod batch;
mod csv_row;
mod file_utils;
mod parsers;
mod run;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[cfg(not(feature = "dhat-heap"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark the exact and approximate engines on a single graph
    Run {
        #[command(flatten)]
        args: RunArgs,
    },
    /// Benchmark every graph of a dataset batch in parallel
    #[command(visible_alias = "b")]
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },
    /// Merge raw per-graph CSV rows into a single CSV file
    Aggregate {
        #[command(flatten)]
        args: AggregateArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Run { args } => run::run(args)?,
        Commands::Batch { args } => batch::run(args)?,
        Commands::Aggregate { args } => aggregate::run(args)?,
    }

    Ok(())
}
