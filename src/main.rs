use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "iam-role-verifier",
    version,
    about = "Checks an IAM role policy and rejects wildcard resources"
)]
struct Cli {
    /// Path to the role policy JSON file. Prompted for on stdin if omitted.
    path: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let path = match cli.path {
        Some(path) => path,
        None => prompt_path()?,
    };
    debug!(path = %path.display(), "verifying role policy");

    let accepted = iam_role_verifier::verify_file(&path)
        .with_context(|| format!("failed to verify {}", path.display()))?;
    println!("{}", accepted);

    Ok(())
}

fn prompt_path() -> Result<PathBuf> {
    println!("Please provide path to JSON file to check: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read path from stdin")?;

    Ok(PathBuf::from(line.trim()))
}
