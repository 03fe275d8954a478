//! u-antpath CLI - find a short start-to-end path with an ant colony.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::Level;

use u_antpath::aco::{AcoConfig, AcoRunner, PathProblem};
use u_antpath::matrix::{load_edge_list, presets, DistanceMatrix};
use u_antpath::report::{ConvergenceSeries, RouteBreakdown};

#[derive(Parser)]
#[command(name = "u-antpath")]
#[command(author, version, about = "Ant Colony Optimization path search", long_about = None)]
struct Cli {
    /// Use the built-in 12-node demo matrix
    #[arg(long, conflicts_with = "edges")]
    preset: bool,

    /// Edge-list file (header line, then `source target weight` rows)
    #[arg(long)]
    edges: Option<PathBuf>,

    /// Node count for the edge list (default: largest index + 1)
    #[arg(long, requires = "edges")]
    nodes: Option<usize>,

    /// Start node (prompted for when omitted)
    #[arg(short, long)]
    start: Option<usize>,

    /// End node (prompted for when omitted)
    #[arg(short, long)]
    end: Option<usize>,

    /// TOML file with colony parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ants per iteration
    #[arg(long)]
    ants: Option<usize>,

    /// Number of iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Pheromone evaporation rate in [0, 1)
    #[arg(long)]
    evaporation: Option<f64>,

    /// Pheromone influence exponent
    #[arg(long)]
    alpha: Option<f64>,

    /// Visibility influence exponent
    #[arg(long)]
    beta: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Build the ants of each iteration in parallel
    #[arg(long)]
    parallel: bool,

    /// Only accept tours that follow real edges all the way
    #[arg(long)]
    strict: bool,

    /// Write the convergence series as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Draw the convergence series as a PNG chart
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;
    let distance = load_matrix(&cli)?;

    let start = match cli.start {
        Some(n) => n,
        None => prompt_usize("Start node: ")?,
    };
    let end = match cli.end {
        Some(n) => n,
        None => prompt_usize("End node: ")?,
    };

    let problem = PathProblem::new(distance, start, end)?;
    let result = AcoRunner::run(&problem, &config)?;

    if let Some(path) = &cli.csv {
        write_csv(path, ConvergenceSeries::from_result(&result))?;
    }
    #[cfg(feature = "plot")]
    if let Some(path) = &cli.plot {
        ConvergenceSeries::from_result(&result)
            .render_png(path)
            .with_context(|| format!("Failed to draw {}", path.display()))?;
    }

    match &result.best_tour {
        Some(tour) => {
            println!("\nBest route: {tour:?}");
            println!("Best route length: {:.2}", result.best_length);
            if let Some(status) = result.best_status {
                println!("Route status: {status:?}");
            }
            println!("\nRoute details:");
            println!("{}", RouteBreakdown::new(tour, problem.distance()));
        }
        None => println!("No route found between {start} and {end}."),
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<AcoConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AcoConfig::default(),
    };

    if let Some(n) = cli.ants {
        config.num_ants = n;
    }
    if let Some(n) = cli.iterations {
        config.num_iterations = n;
    }
    if let Some(rate) = cli.evaporation {
        config.evaporation_rate = rate;
    }
    if let Some(alpha) = cli.alpha {
        config.alpha = alpha;
    }
    if let Some(beta) = cli.beta {
        config.beta = beta;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.parallel |= cli.parallel;
    config.require_complete_tours |= cli.strict;

    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<AcoConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn load_matrix(cli: &Cli) -> Result<DistanceMatrix> {
    if cli.preset {
        return Ok(presets::demo_12());
    }
    if let Some(path) = &cli.edges {
        return load_edge_list(path, cli.nodes)
            .with_context(|| format!("Failed to load matrix: {}", path.display()));
    }

    println!("Select matrix source (1: built-in 12-node matrix; 2: edge-list file):");
    match prompt_usize("Mode: ")? {
        1 => Ok(presets::demo_12()),
        2 => {
            let path = PathBuf::from(prompt_line("Edge-list file: ")?);
            load_edge_list(&path, None)
                .with_context(|| format!("Failed to load matrix: {}", path.display()))
        }
        other => bail!("unknown matrix source {other}"),
    }
}

fn write_csv(path: &Path, series: ConvergenceSeries<'_>) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    series
        .write_csv(BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn prompt_line(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

fn prompt_usize(label: &str) -> Result<usize> {
    let line = prompt_line(label)?;
    line.parse()
        .with_context(|| format!("expected a non-negative integer, got {line:?}"))
}
