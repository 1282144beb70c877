//! qforge command-line interface.
//!
//! Each subcommand reads one input line (stdin or `--input`) and prints
//! one result line to stdout. Logs go to stderr.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

use qforge_challenges::runners::{
    BombTesterRunner, ChshRunner, DeutschJozsaRunner, FindTheCarRunner, IsingRunner,
    MeasurementGroupingRunner, MindTheGapRunner, OrderMattersRunner, QramRunner,
    TardigradeRunner, TripleGivensRunner,
};

mod commands;

use commands::{exercise, list};

/// qforge - quantum computing challenges on a statevector simulator
#[derive(Parser)]
#[command(name = "qforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Seed for sampling and initialisation
    #[arg(long, env = "QFORGE_SEED", default_value = "0", global = true)]
    seed: u64,

    /// Read the input line from a file instead of stdin
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Show progress bars on stderr
    #[arg(long, global = true)]
    progress: bool,

    #[command(subcommand)]
    command: Commands,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The plain result line
    Text,
    /// A JSON value
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a 4-way oracle family as 4-same or 2-and-2
    DeutschJozsa,
    /// Entanglement entropy with and without the tardigrade
    Tardigrade,
    /// Train CHSH measurement angles and print the win probability
    Chsh,
    /// Elitzur-Vaidman bomb tester statistics
    BombTester,
    /// Locate the car with two oracle queries
    FindTheCar,
    /// Difference between RX·RY and RY·RX expectation values
    OrderMatters,
    /// Group Pauli words into jointly measurable sets
    OptimizeMeasurements,
    /// Probabilities after a triple Givens rotation sequence
    TripleGivens,
    /// Ground and first excited energy of H2
    MindTheGap,
    /// Train a variational Ising phase classifier
    IsingClassifier,
    /// Amplitudes of a QRAM-loaded rotation table
    Qram,
    /// List the available exercises
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let io = exercise::Io {
        input: cli.input.as_deref(),
        format: cli.format,
    };
    let (seed, progress) = (cli.seed, cli.progress);

    let result = match cli.command {
        Commands::DeutschJozsa => exercise::execute(&DeutschJozsaRunner::default().with_seed(seed), &io),
        Commands::Tardigrade => exercise::execute(&TardigradeRunner, &io),
        Commands::Chsh => exercise::execute(&ChshRunner::default().with_progress(progress), &io),
        Commands::BombTester => exercise::execute(
            &BombTesterRunner::default()
                .with_seed(seed)
                .with_progress(progress),
            &io,
        ),
        Commands::FindTheCar => exercise::execute(&FindTheCarRunner::default().with_seed(seed), &io),
        Commands::OrderMatters => exercise::execute(&OrderMattersRunner, &io),
        Commands::OptimizeMeasurements => exercise::execute(&MeasurementGroupingRunner, &io),
        Commands::TripleGivens => exercise::execute(&TripleGivensRunner, &io),
        Commands::MindTheGap => exercise::execute(&MindTheGapRunner::default(), &io),
        Commands::IsingClassifier => exercise::execute(
            &IsingRunner::default()
                .with_seed(seed)
                .with_progress(progress),
            &io,
        ),
        Commands::Qram => exercise::execute(&QramRunner, &io),
        Commands::List => {
            list::execute(cli.format);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
