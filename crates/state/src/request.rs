use uuid::Uuid;

use horizon_backend::docgen::DocModel;
use horizon_backend::health::RiskAnalysis;
use horizon_backend::research::ResearchEntry;
use horizon_backend::tutor::TutorMode;

use crate::domain::Domain;
use crate::education::{Level, TeachingStyle};
use crate::science::EntryType;

pub const GENERIC_ERROR: &str = "Generation failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// One generation job, as built by a panel. The worker translates each
/// variant into the corresponding backend call.
#[derive(Debug, Clone)]
pub enum GenerateRequest {
    OrganizeResearch {
        notes: String,
        entry_type: EntryType,
    },
    Tutor {
        topic: String,
        level: Level,
        style: TeachingStyle,
        mode: TutorMode,
    },
    DescribeImage {
        image: Vec<u8>,
        mime_type: String,
    },
    SynthesizeSpeech {
        text: String,
    },
    AnalyzeHealth {
        patient_data: String,
    },
    DraftEmail {
        points: String,
    },
    GenerateDocs {
        code: String,
        model: DocModel,
    },
}

impl GenerateRequest {
    pub fn domain(&self) -> Domain {
        match self {
            GenerateRequest::OrganizeResearch { .. } => Domain::Science,
            GenerateRequest::Tutor { .. } => Domain::Education,
            GenerateRequest::DescribeImage { .. } | GenerateRequest::SynthesizeSpeech { .. } => {
                Domain::Accessibility
            }
            GenerateRequest::AnalyzeHealth { .. } => Domain::Health,
            GenerateRequest::DraftEmail { .. } => Domain::Business,
            GenerateRequest::GenerateDocs { .. } => Domain::Technology,
        }
    }
}

/// One tagged variant per call site; replies carry exactly the payload the
/// requesting panel knows how to render.
#[derive(Debug, Clone)]
pub enum GenerateOutput {
    Research(ResearchEntry),
    Lesson { mode: TutorMode, text: String },
    ImageDescription(String),
    Speech(Vec<f32>),
    RiskReport(RiskAnalysis),
    Email(String),
    Documentation(String),
}

/// In-flight tracking for one panel's request slot. Replies for anything
/// other than the current id are stale and must be dropped.
#[derive(Debug, Clone, Default)]
pub struct JobState {
    pub loading: bool,
    pub error: Option<String>,
    in_flight: Option<RequestId>,
}

impl JobState {
    pub fn begin(&mut self) -> RequestId {
        let id = RequestId::new();
        self.loading = true;
        self.error = None;
        self.in_flight = Some(id);
        id
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.in_flight == Some(id)
    }

    pub fn finish(&mut self) {
        self.loading = false;
        self.in_flight = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.in_flight = None;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn begin_supersedes_previous_request() {
        let mut job = JobState::default();
        let first = job.begin();
        let second = job.begin();
        assert!(!job.is_current(first));
        assert!(job.is_current(second));
        assert!(job.loading);
    }

    #[test]
    fn fail_clears_loading_and_records_message() {
        let mut job = JobState::default();
        let id = job.begin();
        job.fail(GENERIC_ERROR);
        assert!(!job.loading);
        assert!(!job.is_current(id));
        assert_eq!(job.error.as_deref(), Some(GENERIC_ERROR));
    }

    #[test]
    fn requests_route_to_their_domains() {
        let request = GenerateRequest::SynthesizeSpeech {
            text: "hi".to_string(),
        };
        assert_eq!(request.domain(), Domain::Accessibility);
        let request = GenerateRequest::DraftEmail {
            points: "- reschedule".to_string(),
        };
        assert_eq!(request.domain(), Domain::Business);
    }
}
