//! Error types for gemcommit modules using thiserror.

use thiserror::Error;

/// Errors from reading configuration out of the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is required")]
    MissingApiKey,
}

/// Errors from git subprocess operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Not in a git repository")]
    NotARepository,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Failed to get staged changes: {0}")]
    DiffFailed(String),

    #[error("No staged changes found - run 'git add .' first")]
    NoStagedChanges,

    #[error("git commit failed: {reason}\nOutput: {output}")]
    CommitFailed { reason: String, output: String },
}

/// Errors from the Gemini generateContent API.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API call failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Gemini API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Gemini returned invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("No response from Gemini")]
    NoResponse,
}

/// Errors from the generate-and-commit pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Gemini(#[from] GeminiError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
