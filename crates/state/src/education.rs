use horizon_backend::tutor::TutorMode;

use crate::history::TextHistory;
use crate::request::JobState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    FiveYearOld,
    #[default]
    HighSchool,
    Undergrad,
    Phd,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::FiveYearOld,
        Level::HighSchool,
        Level::Undergrad,
        Level::Phd,
    ];

    /// Audience description embedded in the system instruction.
    pub fn id(self) -> &'static str {
        match self {
            Level::FiveYearOld => "5 year old",
            Level::HighSchool => "High School",
            Level::Undergrad => "Undergrad",
            Level::Phd => "PhD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::FiveYearOld => "5 Year Old",
            Level::HighSchool => "High School",
            Level::Undergrad => "Undergrad",
            Level::Phd => "PhD Researcher",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Level::FiveYearOld => "🎈",
            Level::HighSchool => "🎒",
            Level::Undergrad => "🎓",
            Level::Phd => "🔬",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Level::FiveYearOld => "Simple & Fun",
            Level::HighSchool => "Foundational",
            Level::Undergrad => "Detailed",
            Level::Phd => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeachingStyle {
    #[default]
    Standard,
    Socratic,
    Storytelling,
    Academic,
}

impl TeachingStyle {
    pub const ALL: [TeachingStyle; 4] = [
        TeachingStyle::Standard,
        TeachingStyle::Socratic,
        TeachingStyle::Storytelling,
        TeachingStyle::Academic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TeachingStyle::Standard => "Standard",
            TeachingStyle::Socratic => "Socratic",
            TeachingStyle::Storytelling => "Storytelling",
            TeachingStyle::Academic => "Academic",
        }
    }
}

pub struct EducationState {
    pub topic: TextHistory,
    pub level: Level,
    pub style: TeachingStyle,
    pub explanation: String,
    pub active_mode: TutorMode,
    pub job: JobState,
}

impl Default for EducationState {
    fn default() -> Self {
        Self {
            topic: TextHistory::new(String::new()),
            level: Level::default(),
            style: TeachingStyle::default(),
            explanation: String::new(),
            active_mode: TutorMode::default(),
            job: JobState::default(),
        }
    }
}
