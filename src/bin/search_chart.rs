//! Render the search results scaling chart from a CSV results file.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use algobench::{CsvStore, Plot, PlottersCharts, SeriesMap, Store};

/// Render log-log curves and grouped bars of search benchmark results
#[derive(Parser)]
#[command(name = "search-chart", version)]
struct Args {
    /// Input CSV of algorithm,size,seconds rows
    results: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "images/search_results.png")]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let store = CsvStore::new(&args.results);
    let series = SeriesMap::from_samples(&store.load()?);

    let charts = PlottersCharts::default();
    charts.render_scaling(&series, &args.out)?;

    println!("Chart written to '{}'", args.out.display());
    Ok(())
}
