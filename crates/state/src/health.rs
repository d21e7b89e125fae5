use horizon_backend::health::RiskAnalysis;

use crate::history::TextHistory;
use crate::request::JobState;

pub struct HealthState {
    pub patient_data: TextHistory,
    pub analysis: Option<RiskAnalysis>,
    pub job: JobState,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            patient_data: TextHistory::new(String::new()),
            analysis: None,
            job: JobState::default(),
        }
    }
}
