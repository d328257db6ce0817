//! Gemini API integration.

pub mod client;
pub mod types;

pub use client::GeminiClient;
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
