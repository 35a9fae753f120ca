//! solve — find a high-reward city path within a working-time budget.
//!
//! Reads the three tables the upload form takes (cities, paths, time), runs
//! the multi-start random-walk search, and prints the solution summary.
//!
//! ```text
//! solve --cities cities.csv --paths paths.csv --time time.csv --seed 7
//! RUST_LOG=debug solve --cities cities.csv --paths paths.csv --budget 480 --json
//! ```

mod summary;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use op_core::{DEFAULT_SAMPLES_PER_START, SearchConfig, SearchRng};
use op_io::{load_graph, load_time_budget_csv};
use op_search::{CancelToken, Search};

use summary::Summary;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City table: name,x,y,value
    #[arg(long)]
    cities: PathBuf,

    /// Path table: city_from,city_to,time
    #[arg(long)]
    paths: PathBuf,

    /// Time table: time (first row is the working-time budget)
    #[arg(long, required_unless_present = "budget")]
    time: Option<PathBuf>,

    /// Working-time budget; overrides --time
    #[arg(long)]
    budget: Option<f64>,

    /// Random walks drawn from every start city
    #[arg(long, default_value_t = DEFAULT_SAMPLES_PER_START)]
    samples: usize,

    /// Master RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // 1. Tables → graph.
    let graph = load_graph(&args.cities, &args.paths)
        .with_context(|| format!("loading {} and {}", args.cities.display(), args.paths.display()))?;
    let time_budget = match (args.budget, &args.time) {
        (Some(budget), _) => budget,
        (None, Some(path)) => load_time_budget_csv(path)
            .with_context(|| format!("loading {}", path.display()))?,
        (None, None) => anyhow::bail!("either --time or --budget is required"),
    };
    info!(
        cities = graph.city_count(),
        edges = graph.edge_count(),
        time_budget,
        "graph loaded"
    );

    // 2. Config.
    let config = SearchConfig::new(time_budget)
        .with_samples(args.samples)
        .with_seed(args.seed)
        .with_threads(args.threads);

    // 3. Ctrl-C abandons the search between samples.
    let token = CancelToken::new();
    ctrlc::set_handler({
        let token = token.clone();
        move || token.cancel()
    })
    .context("cannot set interruption handler")?;

    // 4. Search.
    let mut search = Search::from_config(&graph, &config).cancel(token);
    if let Some(ms) = args.timeout_ms {
        search = search.timeout(Duration::from_millis(ms));
    }
    let t0 = Instant::now();
    let solution = search.solve(&mut SearchRng::new(config.seed))?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    let summary = Summary::new(&graph, &solution, time_budget, elapsed);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
