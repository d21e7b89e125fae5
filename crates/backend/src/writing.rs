//! Business: professional email drafting.

use crate::client::{BackendError, GeminiClient, TEXT_MODEL};
use crate::wire::GenerateContentRequest;

pub fn draft_email(client: &GeminiClient, points: &str) -> Result<String, BackendError> {
    let prompt = format!("Draft a professional email based on these points: {points}");
    let response = client.generate(TEXT_MODEL, &GenerateContentRequest::from_text(prompt))?;
    response.text().ok_or(BackendError::EmptyResponse)
}
