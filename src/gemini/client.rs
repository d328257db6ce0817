//! HTTP client for the Gemini `generateContent` endpoint.

use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;
use crate::error::GeminiError;

use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Client for a single Gemini model.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint URL without the key query parameter.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send a single prompt and return the text of the first candidate's first part.
    ///
    /// Any status other than 200 becomes [`GeminiError::Api`] carrying the raw
    /// body. An empty candidate or part list becomes [`GeminiError::NoResponse`].
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let endpoint = self.endpoint();

        debug!("POST {} (prompt {} chars)", endpoint, prompt.len());

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(GeminiError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(GeminiError::Request)?;

        if status != StatusCode::OK {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(GeminiError::InvalidJson)?;

        debug!("Gemini returned {} candidate(s)", parsed.candidates.len());

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or(GeminiError::NoResponse)
    }
}
