use horizon_backend::research::ResearchEntry;

use crate::history::TextHistory;
use crate::request::JobState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryType {
    #[default]
    Literature,
    Experiment,
    Hypothesis,
}

impl EntryType {
    pub const ALL: [EntryType; 3] = [
        EntryType::Literature,
        EntryType::Experiment,
        EntryType::Hypothesis,
    ];

    /// Identifier sent to the backend prompt.
    pub fn id(self) -> &'static str {
        match self {
            EntryType::Literature => "literature",
            EntryType::Experiment => "experiment",
            EntryType::Hypothesis => "hypothesis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryType::Literature => "Literature Review",
            EntryType::Experiment => "Experimental Data",
            EntryType::Hypothesis => "Hypothesis Tracking",
        }
    }
}

pub struct ScienceState {
    pub notes: TextHistory,
    pub entry_type: EntryType,
    pub entry: Option<ResearchEntry>,
    pub job: JobState,
}

impl Default for ScienceState {
    fn default() -> Self {
        Self {
            notes: TextHistory::new(String::new()),
            entry_type: EntryType::default(),
            entry: None,
            job: JobState::default(),
        }
    }
}
