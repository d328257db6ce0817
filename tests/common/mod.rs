//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use gemcommit::{Config, GeminiClient, GitCli};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_MODEL: &str = "gemini-1.5-flash-latest";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// A throwaway git repository driven through the git CLI.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
}

impl TestRepo {
    /// Create a new repository with a committer identity and no commits.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init", "-q"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Create a repository that already has one commit.
    pub fn with_initial_commit() -> Self {
        let repo = Self::new();
        repo.write("README.md", "# test\n");
        repo.stage("README.md");
        repo.git(&["commit", "-q", "-m", "init"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executor pinned to this repository.
    pub fn executor(&self) -> GitCli {
        GitCli::in_dir(self.path())
    }

    /// Run git in the repository, panicking on failure. Returns stdout.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn write(&self, file: &str, content: &str) {
        std::fs::write(self.path().join(file), content).expect("Failed to write test file");
    }

    pub fn stage(&self, file: &str) {
        self.git(&["add", file]);
    }

    /// Full message of the HEAD commit, without the trailing newline.
    pub fn head_message(&self) -> String {
        self.git(&["log", "-1", "--format=%B"]).trim_end().to_string()
    }

    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .expect("rev-list --count returned a number")
    }
}

/// A `generateContent` response body with one candidate holding `text`.
pub fn gemini_body(text: &str) -> Value {
    json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    })
}

/// Start a mock Gemini server that answers every generate call with `text`.
pub async fn mock_gemini(text: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(text)))
        .mount(&server)
        .await;
    server
}

/// Client pointed at a mock server.
pub fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(&Config {
        api_key: TEST_API_KEY.to_string(),
        model: TEST_MODEL.to_string(),
        base_url: server.uri(),
    })
}
