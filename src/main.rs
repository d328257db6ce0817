//! gemcommit - CLI entry point.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gemcommit::git::check_git_installed;
use gemcommit::{Config, GeminiClient, GitCli, PipelineOptions, run_pipeline};

/// Generate a commit message for staged changes using Gemini.
#[derive(Parser, Debug)]
#[command(name = "gemcommit")]
#[command(about = "Generate a commit message for staged changes using Gemini")]
#[command(version)]
struct Cli {
    /// Gemini model to use (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Commit without asking for confirmation
    #[arg(short = 'y', long)]
    yes: bool,

    /// Print the generated message without committing
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("Gemini Git Commit Generator");

    // Step 1: Check prerequisites. The credential check runs before any git
    // subprocess is spawned.
    let config = Config::from_env()
        .context("Set GEMINI_API_KEY to your Gemini API key")?
        .with_model(cli.model);
    println!("✓ API key found");

    check_git_installed()?;

    // Step 2: Generate and commit
    let git = GitCli::new();
    let client = GeminiClient::new(&config);
    let options = PipelineOptions {
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
    };

    let mut input = io::stdin().lock();
    let mut out = io::stdout();

    run_pipeline(&git, &client, options, &mut input, &mut out).await?;

    Ok(())
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "gemcommit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
