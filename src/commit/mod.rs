//! AI-generated commit messages.

pub mod confirm;
pub mod message;
pub mod prompt;

pub use confirm::{is_affirmative, read_confirmation};
pub use message::{generate_commit_message, sanitize_message};
pub use prompt::build_commit_prompt;
