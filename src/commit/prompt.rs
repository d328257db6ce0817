//! Prompt construction for generated commit messages.

/// Conventional commit types the model may choose from.
pub const COMMIT_TYPES: [&str; 7] = ["feat", "fix", "docs", "style", "refactor", "test", "chore"];

/// Maximum subject length requested from the model.
pub const MAX_MESSAGE_CHARS: usize = 50;

/// Build the prompt for a commit message describing `diff`.
///
/// The diff is embedded verbatim.
pub fn build_commit_prompt(diff: &str) -> String {
    format!(
        "Generate a short git commit message for these changes:

{diff}

Rules:
- Use format: type: description
- Types: {types}
- Keep under {max} characters
- Be specific

Just return the commit message, nothing else:",
        types = COMMIT_TYPES.join(", "),
        max = MAX_MESSAGE_CHARS,
    )
}
