use std::time::Instant;

use crate::accessibility::{AccessibilityState, AccessibilityTab};
use crate::business::BusinessState;
use crate::domain::Domain;
use crate::education::EducationState;
use crate::feedback::FeedbackState;
use crate::health::HealthState;
use crate::history::TextHistory;
use crate::science::ScienceState;
use crate::technology::TechnologyState;

pub struct AppState {
    pub active_domain: Domain,
    pub science: ScienceState,
    pub education: EducationState,
    pub accessibility: AccessibilityState,
    pub health: HealthState,
    pub business: BusinessState,
    pub technology: TechnologyState,
    pub feedback: FeedbackState,
}

impl AppState {
    pub fn new(business_draft: Option<String>) -> Self {
        Self {
            active_domain: Domain::Home,
            science: ScienceState::default(),
            education: EducationState::default(),
            accessibility: AccessibilityState::default(),
            health: HealthState::default(),
            business: BusinessState::restore(business_draft),
            technology: TechnologyState::default(),
            feedback: FeedbackState::default(),
        }
    }

    fn histories_mut(&mut self) -> [&mut TextHistory; 6] {
        [
            &mut self.science.notes,
            &mut self.education.topic,
            &mut self.accessibility.tts_text,
            &mut self.health.patient_data,
            &mut self.business.points,
            &mut self.technology.code,
        ]
    }

    /// Fires any due debounce commits. Called once per frame.
    pub fn tick_histories(&mut self, now: Instant) {
        for history in self.histories_mut() {
            history.tick(now);
        }
    }

    /// Earliest scheduled commit across all fields; the frame loop uses it
    /// to wake up even when no input arrives.
    pub fn next_commit_deadline(&self) -> Option<Instant> {
        [
            self.science.notes.pending_deadline(),
            self.education.topic.pending_deadline(),
            self.accessibility.tts_text.pending_deadline(),
            self.health.patient_data.pending_deadline(),
            self.business.points.pending_deadline(),
            self.technology.code.pending_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// The field the undo/redo shortcuts act on, if the active panel has
    /// an editable one in view.
    pub fn active_history_mut(&mut self) -> Option<&mut TextHistory> {
        match self.active_domain {
            Domain::Home => None,
            Domain::Science => Some(&mut self.science.notes),
            Domain::Education => Some(&mut self.education.topic),
            Domain::Accessibility => match self.accessibility.tab {
                AccessibilityTab::Vision => None,
                AccessibilityTab::Speech => Some(&mut self.accessibility.tts_text),
            },
            Domain::Health => Some(&mut self.health.patient_data),
            Domain::Business => Some(&mut self.business.points),
            Domain::Technology => Some(&mut self.technology.code),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn buffers_are_independent() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        state.science.notes.set("observations".to_string(), t0);
        state.health.patient_data.set("BP 145/95".to_string(), t0);
        state.tick_histories(t0 + Duration::from_secs(1));

        state.science.notes.undo();
        assert_eq!(state.science.notes.value(), "");
        // Undoing one field never touches another.
        assert_eq!(state.health.patient_data.value(), "BP 145/95");
        assert!(state.health.patient_data.can_undo());
    }

    #[test]
    fn next_deadline_is_the_earliest_pending_commit() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        assert!(state.next_commit_deadline().is_none());

        state.business.points.set("- a".to_string(), t0);
        state
            .technology
            .code
            .set("fn x() {}".to_string(), t0 + Duration::from_millis(200));
        let deadline = state.next_commit_deadline().unwrap();
        assert_eq!(deadline, t0 + Duration::from_millis(700));
    }

    #[test]
    fn shortcut_routing_follows_the_active_panel() {
        let mut state = AppState::default();
        assert!(state.active_history_mut().is_none());

        state.active_domain = Domain::Accessibility;
        // The vision tab has no text field.
        assert!(state.active_history_mut().is_none());
        state.accessibility.tab = AccessibilityTab::Speech;
        assert!(state.active_history_mut().is_some());

        state.active_domain = Domain::Technology;
        let t0 = Instant::now();
        state.technology.code.set("let x = 1;".to_string(), t0);
        state.tick_histories(t0 + Duration::from_secs(1));
        state.active_history_mut().unwrap().undo();
        assert_eq!(state.technology.code.value(), "");
    }
}
