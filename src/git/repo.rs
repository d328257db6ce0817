//! Repository and toolchain preconditions.

use tracing::debug;

use crate::error::GitError;

use super::{GitExecutor, args};

/// Check that a `git` executable is available on `PATH`.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map_err(|_| GitError::NotInstalled)?;
    Ok(())
}

/// Whether the working directory is inside a git repository.
///
/// Runs `git rev-parse --git-dir`; a spawn failure counts as "no".
pub async fn is_git_repo<G: GitExecutor + ?Sized>(git: &G) -> bool {
    match git.run(args(&["rev-parse", "--git-dir"])).await {
        Ok(output) => output.success,
        Err(e) => {
            debug!("git rev-parse failed to run: {}", e);
            false
        }
    }
}

/// Fail with [`GitError::NotARepository`] unless inside a git repository.
pub async fn ensure_git_repo<G: GitExecutor + ?Sized>(git: &G) -> Result<(), GitError> {
    if is_git_repo(git).await {
        Ok(())
    } else {
        Err(GitError::NotARepository)
    }
}
