//! partition CLI: residue of a number file under a selected heuristic.
//!
//! ```text
//! partition <flag> <algorithm> <inputfile>
//! ```
//!
//! Prints the residue truncated to an integer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use u_partition::algorithm::Algorithm;
use u_partition::input::read_numbers;
use u_partition::search::SearchConfig;
use u_partition::Result;

#[derive(Parser)]
#[command(name = "partition")]
#[command(about = "Number partitioning with Karmarkar-Karp and local search")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Reserved flag, accepted and ignored
    flag: i64,

    /// Algorithm code: 0 = KK, 1/2/3 = standard RR/HC/SA, 11/12/13 = prepartition RR/HC/SA
    algorithm: i64,

    /// File with one number per line
    input: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Iterations per local-search run
    #[arg(short, long, default_value_t = u_partition::search::DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Independent restarts; the best residue is reported
    #[arg(short, long, default_value_t = 1)]
    restarts: usize,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<f64> {
    let algorithm = Algorithm::from_code(cli.algorithm)?;
    let values = read_numbers(&cli.input)?;
    info!(%algorithm, count = values.len(), "loaded input");

    let mut config = SearchConfig::default().with_iterations(cli.iterations);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    if cli.restarts > 1 {
        algorithm.solve_restarts(&values, &config, cli.restarts)
    } else {
        algorithm.solve(&values, &config)
    }
}

fn main() -> ExitCode {
    enable_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(residue) => {
            println!("{}", residue.trunc() as i64);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "partition failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
