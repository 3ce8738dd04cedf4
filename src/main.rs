use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};

/// Sum numeric records from a JSON file across parallel workers
#[derive(Parser)]
#[command(name = "parsum")]
#[command(about = "Sum pairs of integers from a JSON file in parallel", long_about = None)]
struct Cli {
    /// JSON file containing the records to sum
    #[arg(short, long, default_value = "data.json")]
    file: PathBuf,

    /// Number of parallel workers (must be at least 1)
    #[arg(short = 'j', long, default_value_t = 4)]
    workers: usize,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // Diagnostics go to stderr; stdout carries only the result line.
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!(
        "parsum started: file {}, {} workers",
        cli.file.display(),
        cli.workers
    );

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let records = parsum::loader::load_records(&cli.file).await?;
    let total = parsum::reduce::reduce_total(records, cli.workers).await?;
    println!("Total Sum: {total}");
    Ok(())
}
