//! Science: knowledge base entry generation from raw notes.

use serde::Deserialize;

use crate::client::{BackendError, GeminiClient, TEXT_MODEL};
use crate::wire::{GenerateContentRequest, GenerationConfig, Schema};

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchEntry {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: String,
}

fn entry_schema() -> Schema {
    Schema::object(
        [
            ("title", Schema::string()),
            ("summary", Schema::string()),
            (
                "content",
                Schema::string().describe("Detailed content in Markdown format"),
            ),
            ("tags", Schema::array(Schema::string())),
            ("category", Schema::string()),
        ],
        &["title", "content", "tags", "category"],
    )
}

pub fn organize_research(
    client: &GeminiClient,
    notes: &str,
    entry_type: &str,
) -> Result<ResearchEntry, BackendError> {
    let prompt = format!(
        "Transform the following raw notes into a structured scientific knowledge base entry \
         of type \"{entry_type}\".\nInput Notes: {notes}"
    );
    let request =
        GenerateContentRequest::from_text(prompt).with_config(GenerationConfig::json(entry_schema()));

    let response = client.generate(TEXT_MODEL, &request)?;
    let text = response.text().ok_or(BackendError::EmptyResponse)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_parses_without_optional_summary() {
        let entry: ResearchEntry = serde_json::from_str(
            r###"{
                "title": "Reaction kinetics of 42b",
                "content": "## Results\nTemp increased by 10%.",
                "tags": ["kinetics", "exp-42b"],
                "category": "Experimental Data"
            }"###,
        )
        .unwrap();
        assert_eq!(entry.title, "Reaction kinetics of 42b");
        assert_eq!(entry.summary, "");
        assert_eq!(entry.tags.len(), 2);
    }

    #[test]
    fn schema_requires_the_original_fields() {
        let value = serde_json::to_value(entry_schema()).unwrap();
        assert_eq!(
            value["required"],
            serde_json::json!(["title", "content", "tags", "category"])
        );
        assert_eq!(value["properties"]["content"]["description"], "Detailed content in Markdown format");
    }
}
