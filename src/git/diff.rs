//! Staged diff collection.

use tracing::debug;

use crate::error::GitError;

use super::{GitExecutor, args};

/// Collect the unified diff of staged (index) changes.
///
/// Runs `git diff --cached` and returns stdout untouched. Fails with
/// [`GitError::NoStagedChanges`] when the diff is empty or whitespace only.
pub async fn staged_diff<G: GitExecutor + ?Sized>(git: &G) -> Result<String, GitError> {
    let output = git
        .run(args(&["diff", "--cached"]))
        .await
        .map_err(|e| GitError::DiffFailed(e.to_string()))?;

    if !output.success {
        return Err(GitError::DiffFailed(output.failure_reason()));
    }

    if output.stdout.trim().is_empty() {
        return Err(GitError::NoStagedChanges);
    }

    debug!("Staged diff: {} bytes", output.stdout.len());
    Ok(output.stdout)
}
