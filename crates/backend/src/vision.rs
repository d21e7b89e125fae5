//! Accessibility: image description for visually impaired users.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::client::{BackendError, GeminiClient, TEXT_MODEL};
use crate::wire::{Content, GenerateContentRequest, Part};

const INSTRUCTION: &str =
    "Describe this image in detail for visually impaired users. Focus on layout, colors, and key text.";

pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

pub fn describe_image(
    client: &GeminiClient,
    image: &[u8],
    mime_type: &str,
) -> Result<String, BackendError> {
    let request = GenerateContentRequest {
        contents: vec![Content::from_parts(vec![
            Part::inline_data(mime_type, BASE64.encode(image)),
            Part::text(INSTRUCTION),
        ])],
        ..Default::default()
    };
    let response = client.generate(TEXT_MODEL, &request)?;
    response.text().ok_or(BackendError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_extensions_map_to_mime_types() {
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("jpeg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("webp"), Some("image/webp"));
        assert_eq!(mime_for_extension("gif"), None);
        assert_eq!(mime_for_extension(""), None);
    }
}
