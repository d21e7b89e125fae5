use std::time::Duration;

use thiserror::Error;

use crate::wire::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const TEXT_MODEL: &str = "gemini-2.5-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const ERROR_DETAIL_MAX: usize = 300;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no API key configured (pass --api-key or set GEMINI_API_KEY)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned status {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("response contained no usable content")]
    EmptyResponse,
    #[error("malformed response payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid base64 in response: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Blocking client for the hosted generative API. Lives on the generation
/// worker thread; one instance per app.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BackendError> {
        if self.api_key.is_empty() {
            return Err(BackendError::MissingApiKey);
        }

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        log::debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let mut detail = response.text().unwrap_or_default();
            detail.truncate(ERROR_DETAIL_MAX);
            return Err(BackendError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::GenerateContentRequest;

    #[test]
    fn missing_key_fails_before_any_network_io() {
        let client = GeminiClient::new(String::new(), DEFAULT_API_URL.to_string());
        let err = client
            .generate(TEXT_MODEL, &GenerateContentRequest::from_text("hi"))
            .unwrap_err();
        assert!(matches!(err, BackendError::MissingApiKey));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = GeminiClient::new("k".to_string(), "http://localhost:9999/".to_string());
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
