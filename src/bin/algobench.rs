//! Benchmark driver: generate datasets, time sorting and search
//! algorithms, record samples in the CSV result files.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use algobench::adapters::dataset;
use algobench::{Bench, CsvStore, SearchAlgo, SortAlgo};

#[derive(Parser)]
#[command(name = "algobench", version, about = "Sorting and search algorithm benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a dataset file of random 8-digit numbers
    Gen {
        /// Number of values to generate
        #[arg(long)]
        size: usize,

        /// Dataset file to write
        #[arg(long)]
        out: PathBuf,
    },

    /// Time a sorting algorithm over a dataset
    Sort {
        /// Algorithm: bubble, quick, stooge, radix, merge, bitonic
        #[arg(long)]
        algo: String,

        /// Dataset file to sort
        #[arg(long)]
        data: PathBuf,

        /// Results CSV to update
        #[arg(long, default_value = "sorting_result.csv")]
        results: PathBuf,
    },

    /// Time a search algorithm over a dataset
    Search {
        /// Algorithm: linear, binary, ternary, jump
        #[arg(long)]
        algo: String,

        /// Dataset file to search
        #[arg(long)]
        data: PathBuf,

        /// 8-digit value to look for
        #[arg(long)]
        target: u32,

        /// Results CSV to update
        #[arg(long, default_value = "searching_result.csv")]
        results: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Gen { size, out } => {
            dataset::generate(&out, size)?;
            println!("Wrote {} numbers to '{}'", size, out.display());
        }

        Command::Sort { algo, data, results } => {
            let algo: SortAlgo = algo.parse()?;
            let values = dataset::load(&data)?;

            let mut bench = Bench::new(Box::new(CsvStore::new(results)));
            let sample = bench.run_sort(algo, &values)?;

            println!(
                "{}: {} elements in {:.6} seconds",
                sample.algorithm, sample.size, sample.seconds
            );
        }

        Command::Search { algo, data, target, results } => {
            let algo: SearchAlgo = algo.parse()?;
            let values = dataset::load(&data)?;

            let mut bench = Bench::new(Box::new(CsvStore::new(results)));
            let (sample, position) = bench.run_search(algo, &values, target)?;

            match position {
                Some(index) => println!("{target} found at position {index}"),
                None => println!("{target} not found"),
            }
            println!(
                "{}: {} elements in {:.6} seconds",
                sample.algorithm, sample.size, sample.seconds
            );
        }
    }

    Ok(())
}
