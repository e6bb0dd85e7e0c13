use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lazy_segtree::script::{parse_script, Command};
use lazy_segtree::{stress, Max, Min, RepeatMonoid, StressConfig, Sum, UpdateTree};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lazy-segtree", about = "Lazy segment tree driver and stress tester")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare the lazy tree against a brute-force array on random operations.
    Stress {
        /// Monoid stored in the tree.
        #[arg(long, value_enum, default_value_t = MonoidKind::Sum)]
        monoid: MonoidKind,
        /// Number of elements.
        #[arg(long, default_value_t = 100)]
        size: usize,
        /// Number of random operations.
        #[arg(long, default_value_t = 10_000)]
        rounds: usize,
        /// Seed for the operation stream.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Update constants are drawn from [-max_value, max_value].
        #[arg(long, default_value_t = 100)]
        max_value: i64,
        /// Share of operations that are updates, in percent.
        #[arg(long, default_value_t = 50)]
        update_percent: u8,
    },
    /// Run a command script (`overwrite|set`, `accumulate|add`, `query`).
    Replay {
        /// Script file, one command per line.
        script: PathBuf,
        /// Monoid stored in the tree.
        #[arg(long, value_enum, default_value_t = MonoidKind::Sum)]
        monoid: MonoidKind,
        /// Number of identity-initialised elements.
        #[arg(long, conflicts_with = "values")]
        size: Option<usize>,
        /// Comma-separated initial values.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Option<Vec<i64>>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MonoidKind {
    Sum,
    Max,
    Min,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stress {
            monoid,
            size,
            rounds,
            seed,
            max_value,
            update_percent,
        } => {
            let config = StressConfig::new(size)
                .with_rounds(rounds)
                .with_seed(seed)
                .with_max_value(max_value)
                .with_update_percent(update_percent);
            run_stress(monoid, &config)?
        }
        Commands::Replay {
            script,
            monoid,
            size,
            values,
        } => match monoid {
            MonoidKind::Sum => run_replay::<Sum>(&script, size, values)?,
            MonoidKind::Max => run_replay::<Max>(&script, size, values)?,
            MonoidKind::Min => run_replay::<Min>(&script, size, values)?,
        },
    }

    Ok(())
}

fn run_stress(monoid: MonoidKind, config: &StressConfig) -> Result<()> {
    let report = match monoid {
        MonoidKind::Sum => stress::run::<Sum>(config),
        MonoidKind::Max => stress::run::<Max>(config),
        MonoidKind::Min => stress::run::<Min>(config),
    }
    .with_context(|| format!("stress run failed for {:?} (seed {})", monoid, config.seed))?;

    println!(
        "passed\trounds={}\tupdates={}\tqueries={}\tdigest={}",
        report.rounds, report.updates, report.queries, report.digest
    );
    Ok(())
}

fn run_replay<M>(script_path: &Path, size: Option<usize>, values: Option<Vec<i64>>) -> Result<()>
where
    M: RepeatMonoid<Item = i64>,
{
    let text = std::fs::read_to_string(script_path)
        .with_context(|| format!("failed to read script {}", script_path.display()))?;
    let commands = parse_script(&text)
        .with_context(|| format!("failed to parse script {}", script_path.display()))?;

    let mut tree = match (size, values) {
        (_, Some(values)) => UpdateTree::<M>::from_vec(values),
        (Some(size), None) => UpdateTree::<M>::new(size),
        (None, None) => bail!("either --size or --values is required"),
    };

    for (index, command) in commands.iter().enumerate() {
        if let Some(answer) = command
            .execute(&mut tree)
            .with_context(|| format!("command {} ({}) failed", index + 1, describe(command)))?
        {
            println!("{}", answer);
        }
    }

    Ok(())
}

fn describe(command: &Command) -> String {
    match command {
        Command::Update {
            left,
            right,
            update,
        } => format!("{:?} on [{}, {}]", update, left, right),
        Command::Query { left, right } => format!("query [{}, {}]", left, right),
    }
}
