use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context as _, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use softdiff::diff_files;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compare two text files, ignoring how wide each whitespace run is
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The original file
    #[arg(index = 1)]
    file_a: PathBuf,

    /// The modified file
    #[arg(index = 2)]
    file_b: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={}",
                    env!("CARGO_CRATE_NAME"),
                    args.verbose.log_level_filter()
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialise tracing")?;

    debug!(
        "comparing {} with {}",
        args.file_a.display(),
        args.file_b.display()
    );

    match diff_files(&args.file_a, &args.file_b) {
        Ok(output) if output.is_empty() => {
            println!("Files are identical.");
            Ok(ExitCode::SUCCESS)
        }
        Ok(output) => {
            print!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("Error: {error}");
            Ok(ExitCode::FAILURE)
        }
    }
}
