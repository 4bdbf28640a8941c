//! Render the sorting results chart from a CSV results file.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use algobench::{CsvStore, Plot, PlottersCharts, Store};

/// Render a bar chart of sorting benchmark results
#[derive(Parser)]
#[command(name = "sort-chart", version)]
struct Args {
    /// Input CSV of algorithm,size,seconds rows
    results: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "sorting_results.png")]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let store = CsvStore::new(&args.results);
    let samples = store.load()?;

    let charts = PlottersCharts::default();
    charts.render_ranking(&samples, &args.out)?;

    println!("Chart written to '{}'", args.out.display());
    Ok(())
}
