//! Git subprocess operations.
//!
//! Everything shells out to the system `git` binary, inheriting the user's
//! config, hooks, and signing setup.

pub mod commit;
pub mod diff;
pub mod repo;

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

pub use commit::commit;
pub use diff::staged_diff;
pub use repo::{check_git_installed, ensure_git_repo, is_git_repo};

/// Captured result of a finished git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// stdout followed by stderr.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }

    /// Short description of why the command failed.
    pub fn failure_reason(&self) -> String {
        let status = self
            .code
            .map_or("unknown status".to_string(), |c| format!("exit code {c}"));
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            status
        } else {
            format!("{status}: {stderr}")
        }
    }
}

/// Trait for executing git commands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Run git with the given arguments and capture its output.
    async fn run(&self, args: Vec<String>) -> Result<GitOutput, GitError>;
}

/// Executor that calls the real `git` binary.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `path` instead of the current working directory.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }
}

#[async_trait]
impl GitExecutor for GitCli {
    async fn run(&self, args: Vec<String>) -> Result<GitOutput, GitError> {
        debug!("Running git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(GitError::SpawnFailed)?;

        Ok(GitOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Build an owned argument list from string literals.
pub(crate) fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
