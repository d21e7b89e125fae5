use std::time::{Duration, Instant};

use crate::history::TextHistory;
use crate::request::JobState;

/// Storage key for the draft points; the live value is written back through
/// the host's key-value store on save.
pub const DRAFT_STORAGE_KEY: &str = "business_draft_points";

pub const COPIED_NOTICE_DURATION: Duration = Duration::from_secs(2);

pub struct BusinessState {
    pub points: TextHistory,
    pub email: String,
    pub copied_at: Option<Instant>,
    pub job: JobState,
}

impl BusinessState {
    /// `saved` is the previously persisted draft, if any.
    pub fn restore(saved: Option<String>) -> Self {
        Self {
            points: TextHistory::new(saved.unwrap_or_default()),
            email: String::new(),
            copied_at: None,
            job: JobState::default(),
        }
    }

    pub fn copied_notice_visible(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.duration_since(at) < COPIED_NOTICE_DURATION)
    }
}

impl Default for BusinessState {
    fn default() -> Self {
        Self::restore(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_seeds_the_history_buffer() {
        let state = BusinessState::restore(Some("- reschedule review".to_string()));
        assert_eq!(state.points.value(), "- reschedule review");
        // Restored content is the initial value, not an undoable edit.
        assert!(!state.points.can_undo());
    }

    #[test]
    fn copied_notice_expires() {
        let now = Instant::now();
        let mut state = BusinessState::default();
        assert!(!state.copied_notice_visible(now));
        state.copied_at = Some(now);
        assert!(state.copied_notice_visible(now + Duration::from_secs(1)));
        assert!(!state.copied_notice_visible(now + COPIED_NOTICE_DURATION));
    }
}
