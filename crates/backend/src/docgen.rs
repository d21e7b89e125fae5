//! Technology: documentation generation from source code.

use crate::client::{BackendError, GeminiClient};
use crate::wire::GenerateContentRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocModel {
    #[default]
    ProPreview,
    Flash,
}

impl DocModel {
    pub const ALL: [DocModel; 2] = [DocModel::ProPreview, DocModel::Flash];

    pub fn id(self) -> &'static str {
        match self {
            DocModel::ProPreview => "gemini-3-pro-preview",
            DocModel::Flash => "gemini-2.5-flash",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocModel::ProPreview => "Gemini 3.0 Pro",
            DocModel::Flash => "Gemini 2.5 Flash",
        }
    }
}

pub fn generate_documentation(
    client: &GeminiClient,
    code: &str,
    model: DocModel,
) -> Result<String, BackendError> {
    let prompt = format!(
        "Generate clear, concise documentation for the following code.\n\
         Include:\n\
         1. Overview\n\
         2. Function/Class Signatures\n\
         3. Parameters & Return Values\n\
         4. Usage Examples\n\n\
         Output in standard Markdown.\n\n\
         Code:\n{code}"
    );
    let response = client.generate(model.id(), &GenerateContentRequest::from_text(prompt))?;
    response.text().ok_or(BackendError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_ids_stay_distinct() {
        assert_ne!(DocModel::ProPreview.id(), DocModel::Flash.id());
        assert_eq!(DocModel::default(), DocModel::ProPreview);
    }
}
