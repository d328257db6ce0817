//! gemcommit - A CLI tool that writes git commit messages for staged changes.
//!
//! # Overview
//!
//! gemcommit reads the staged diff with `git diff --cached`, asks Gemini for a
//! conventional commit message, shows it, and on confirmation runs
//! `git commit -m <message>`.

pub mod commit;
pub mod config;
pub mod error;
pub mod gemini;
pub mod git;
pub mod pipeline;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, GeminiError, GitError, PipelineError};
pub use gemini::GeminiClient;
pub use git::{GitCli, GitExecutor, GitOutput};
pub use pipeline::{Outcome, PipelineOptions, run_pipeline};
