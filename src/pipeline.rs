//! The generate-and-commit flow.
//!
//! Stages run strictly in order, each depending on the previous one:
//! repository check, staged diff, message generation, confirmation, commit.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::commit::{generate_commit_message, read_confirmation};
use crate::error::PipelineError;
use crate::gemini::GeminiClient;
use crate::git::{GitExecutor, commit, ensure_git_repo, staged_diff};

/// Flags controlling the end of the flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Commit without asking.
    pub assume_yes: bool,
    /// Print the message and stop before asking or committing.
    pub dry_run: bool,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed { message: String, git_output: String },
    Cancelled { message: String },
    DryRun { message: String },
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Committed { message, .. }
            | Outcome::Cancelled { message }
            | Outcome::DryRun { message } => message,
        }
    }
}

/// Run the flow against `git`, asking on `input` and reporting on `out`.
pub async fn run_pipeline<G, R, W>(
    git: &G,
    client: &GeminiClient,
    options: PipelineOptions,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome, PipelineError>
where
    G: GitExecutor + ?Sized,
    R: BufRead,
    W: Write,
{
    ensure_git_repo(git).await?;
    writeln!(out, "✓ Git repository detected")?;

    writeln!(out, "Getting staged changes...")?;
    let diff = staged_diff(git).await?;
    writeln!(out, "✓ Found {} characters of staged changes", diff.len())?;

    writeln!(out, "Generating commit message with {}...", client.model())?;
    let message = generate_commit_message(client, &diff).await?;
    writeln!(out, "\nGenerated commit message:\n{}\n", message)?;

    if options.dry_run {
        debug!("Dry run, not committing");
        return Ok(Outcome::DryRun { message });
    }

    if !options.assume_yes {
        write!(out, "Do you want to commit with this message? (y/n): ")?;
        out.flush()?;

        if !read_confirmation(input)? {
            writeln!(out, "Commit cancelled")?;
            return Ok(Outcome::Cancelled { message });
        }
    }

    let git_output = commit(git, &message).await?;
    write!(out, "Git output: {}", git_output)?;
    writeln!(out, "✓ Successfully committed!")?;

    Ok(Outcome::Committed {
        message,
        git_output,
    })
}
