//! Education: adaptive tutoring responses.

use crate::client::{BackendError, GeminiClient, TEXT_MODEL};
use crate::wire::GenerateContentRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TutorMode {
    #[default]
    Explain,
    Quiz,
    Analogy,
    Application,
}

impl TutorMode {
    pub fn label(self) -> &'static str {
        match self {
            TutorMode::Explain => "Lesson",
            TutorMode::Quiz => "Quiz",
            TutorMode::Analogy => "Analogy",
            TutorMode::Application => "Application",
        }
    }
}

fn system_instruction(level: &str, style: &str, mode: TutorMode) -> String {
    let mut instruction = format!("You are an expert tutor. Target audience: {level}. Style: {style}.");
    instruction.push(' ');
    instruction.push_str(match mode {
        TutorMode::Explain => {
            "Explain the concept clearly using structure, examples, and key terms."
        }
        TutorMode::Quiz => {
            "Create a 3-question multiple-choice quiz to test understanding of the concept. \
             Include the correct answers at the very end."
        }
        TutorMode::Analogy => "Create a creative and intuitive analogy to explain the concept.",
        TutorMode::Application => {
            "Explain the real-world practical applications of this concept. Why does it matter?"
        }
    });
    instruction
}

fn prompt_for(topic: &str, mode: TutorMode) -> String {
    match mode {
        TutorMode::Explain => format!("Explain: {topic}"),
        TutorMode::Quiz => format!("Generate a quiz for: {topic}"),
        TutorMode::Analogy => format!("Give me an analogy for: {topic}"),
        TutorMode::Application => format!("Real-world applications of: {topic}"),
    }
}

pub fn tutor_response(
    client: &GeminiClient,
    topic: &str,
    level: &str,
    style: &str,
    mode: TutorMode,
) -> Result<String, BackendError> {
    let request = GenerateContentRequest::from_text(prompt_for(topic, mode))
        .with_system_instruction(system_instruction(level, style, mode));
    let response = client.generate(TEXT_MODEL, &request)?;
    response.text().ok_or(BackendError::EmptyResponse)
}
