//! Commit creation.

use crate::error::GitError;

use super::{GitExecutor, args};

/// Create a commit from the index with `git commit -m <message>`.
///
/// Returns git's captured output (stdout then stderr) for display.
pub async fn commit<G: GitExecutor + ?Sized>(git: &G, message: &str) -> Result<String, GitError> {
    let output = git
        .run(args(&["commit", "-m", message]))
        .await
        .map_err(|e| GitError::CommitFailed {
            reason: e.to_string(),
            output: String::new(),
        })?;

    if !output.success {
        return Err(GitError::CommitFailed {
            reason: output.failure_reason(),
            output: output.combined(),
        });
    }

    Ok(output.combined())
}
