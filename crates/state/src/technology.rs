use std::time::{Duration, Instant};

use horizon_backend::docgen::DocModel;

use crate::history::TextHistory;
use crate::request::JobState;

pub const GENERATION_STEPS: [&str; 5] = [
    "Analyzing code structure",
    "Extracting function signatures",
    "Identifying parameters & returns",
    "Generating usage examples",
    "Formatting Markdown output",
];

pub const STEP_INTERVAL: Duration = Duration::from_millis(800);
pub const MODEL_NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTheme {
    #[default]
    Dark,
    Light,
}

impl EditorTheme {
    pub fn toggled(self) -> Self {
        match self {
            EditorTheme::Dark => EditorTheme::Light,
            EditorTheme::Light => EditorTheme::Dark,
        }
    }
}

pub struct Snippet {
    pub label: &'static str,
    pub code: &'static str,
}

/// Canned example inputs for the documentation generator. Loading one goes
/// through the history buffer like any other edit.
pub static SNIPPETS: [Snippet; 3] = [
    Snippet {
        label: "Data Type",
        code: r#"/// A reusable button description with multiple variants.
pub struct Button {
    /// The text to display inside the button.
    pub label: String,
    /// Visual style variant.
    pub variant: Variant,
    /// Whether the button reacts to clicks.
    pub enabled: bool,
}

pub enum Variant {
    Primary,
    Secondary,
    Danger,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::Primary,
            enabled: true,
        }
    }
}"#,
    },
    Snippet {
        label: "Utility Function",
        code: r#"use std::time::{Duration, Instant};

/// Tracks a debounced action: `trigger` records the intent, `poll` reports
/// when the quiet period has elapsed since the last trigger.
pub struct Debouncer {
    delay: Duration,
    due: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}"#,
    },
    Snippet {
        label: "API Service",
        code: r#"/// Client for user-related API operations.
pub struct UserService {
    base_url: String,
    token: String,
}

impl UserService {
    pub fn new(base_url: String, token: String) -> Self {
        Self { base_url, token }
    }

    /// Fetches a user by their unique id. Fails if the user is unknown.
    pub fn get_user(&self, id: &str) -> Result<User, ServiceError> {
        let url = format!("{}/users/{id}", self.base_url);
        let response = http_get(&url, &self.token)?;
        Ok(serde_json::from_str(&response)?)
    }

    /// Applies a partial profile update and returns the new record.
    pub fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, ServiceError> {
        let url = format!("{}/users/{id}", self.base_url);
        let body = serde_json::to_string(patch)?;
        let response = http_patch(&url, &self.token, &body)?;
        Ok(serde_json::from_str(&response)?)
    }
}"#,
    },
];

pub struct TechnologyState {
    pub code: TextHistory,
    pub docs: String,
    pub model: DocModel,
    pub model_notice: Option<(String, Instant)>,
    pub editor_theme: EditorTheme,
    pub generation_started_at: Option<Instant>,
    pub job: JobState,
}

impl Default for TechnologyState {
    fn default() -> Self {
        Self {
            code: TextHistory::new(String::new()),
            docs: String::new(),
            model: DocModel::default(),
            model_notice: None,
            editor_theme: EditorTheme::default(),
            generation_started_at: None,
            job: JobState::default(),
        }
    }
}

impl TechnologyState {
    /// Progress checklist position while a generation is running. Display
    /// only; the request itself reports nothing until it completes.
    pub fn current_step(&self, now: Instant) -> usize {
        let Some(started) = self.generation_started_at else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started);
        ((elapsed.as_millis() / STEP_INTERVAL.as_millis()) as usize).min(GENERATION_STEPS.len() - 1)
    }

    pub fn model_notice_visible(&self, now: Instant) -> Option<&str> {
        match &self.model_notice {
            Some((text, at)) if now.duration_since(*at) < MODEL_NOTICE_DURATION => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counter_advances_and_saturates() {
        let now = Instant::now();
        let mut state = TechnologyState::default();
        assert_eq!(state.current_step(now), 0);

        state.generation_started_at = Some(now);
        assert_eq!(state.current_step(now), 0);
        assert_eq!(state.current_step(now + Duration::from_millis(801)), 1);
        assert_eq!(state.current_step(now + Duration::from_millis(2500)), 3);
        assert_eq!(
            state.current_step(now + Duration::from_secs(60)),
            GENERATION_STEPS.len() - 1
        );
    }

    #[test]
    fn model_notice_expires() {
        let now = Instant::now();
        let mut state = TechnologyState::default();
        state.model_notice = Some(("Gemini 2.5 Flash Active".to_string(), now));
        assert!(state.model_notice_visible(now + Duration::from_secs(2)).is_some());
        assert!(state
            .model_notice_visible(now + MODEL_NOTICE_DURATION)
            .is_none());
    }
}
