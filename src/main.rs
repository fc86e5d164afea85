//! passage-mem CLI: reads a passage from stdin and blanks it word by word.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use passage_mem::DrillConfig;

#[derive(Parser)]
#[command(name = "passage-mem", version, about = "Memorize a passage by blanking its words")]
struct Cli {
    /// Seed for the blanking order (defaults to the system clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Type the passage back after each step and keep score
    #[arg(long)]
    practice: bool,

    /// Print the practice summary as JSON
    #[arg(long)]
    json: bool,

    /// Log blanking decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "passage_mem=debug"
    } else {
        "passage_mem=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = DrillConfig::new()
        .with_practice(cli.practice)
        .with_json_summary(cli.json);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    passage_mem::run(&mut stdin.lock(), &mut stdout.lock(), &config)?;

    Ok(())
}
