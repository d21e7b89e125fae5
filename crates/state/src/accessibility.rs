use crate::history::TextHistory;
use crate::request::JobState;

pub const VISION_ERROR: &str =
    "Unable to analyze image. Please try a different image or try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessibilityTab {
    #[default]
    Vision,
    Speech,
}

impl AccessibilityTab {
    pub fn label(self) -> &'static str {
        match self {
            AccessibilityTab::Vision => "Vision Assistant",
            AccessibilityTab::Speech => "Text to Speech",
        }
    }
}

/// An uploaded picture, decoded once and kept around for the request and
/// the on-screen preview.
pub struct LoadedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub texture: egui::TextureHandle,
}

pub struct AccessibilityState {
    pub tab: AccessibilityTab,
    pub image: Option<LoadedImage>,
    pub description: String,
    pub vision: JobState,
    pub tts_text: TextHistory,
    pub speech: JobState,
}

impl Default for AccessibilityState {
    fn default() -> Self {
        Self {
            tab: AccessibilityTab::default(),
            image: None,
            description: String::new(),
            vision: JobState::default(),
            tts_text: TextHistory::new(String::new()),
            speech: JobState::default(),
        }
    }
}

impl AccessibilityState {
    /// Remove the picture and everything derived from it.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.description.clear();
        self.vision = JobState::default();
    }
}
