//! Commit message generation and cleanup.

use tracing::debug;

use crate::commit::prompt::build_commit_prompt;
use crate::error::GeminiError;
use crate::gemini::GeminiClient;

/// Generate a commit message for `diff` with Gemini.
pub async fn generate_commit_message(
    client: &GeminiClient,
    diff: &str,
) -> Result<String, GeminiError> {
    let prompt = build_commit_prompt(diff);
    debug!("Commit prompt length: {} chars", prompt.len());

    let raw = client.generate(&prompt).await?;
    debug!("Raw response: {:?}", raw);

    Ok(sanitize_message(&raw))
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Clean up a model response for use as a commit message.
///
/// Trims surrounding whitespace, then removes at most one leading and at most
/// one trailing quote character (`"` or `'`). The two ends are handled
/// independently, so mismatched quotes are stripped too.
pub fn sanitize_message(raw: &str) -> String {
    let message = raw.trim();
    let message = message.strip_prefix(is_quote).unwrap_or(message);
    let message = message.strip_suffix(is_quote).unwrap_or(message);
    message.to_string()
}
