use std::time::{Duration, Instant};

pub const SUBMIT_DURATION: Duration = Duration::from_millis(1500);
pub const SUCCESS_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackKind {
    #[default]
    Suggestion,
    Issue,
}

impl FeedbackKind {
    pub fn label(self) -> &'static str {
        match self {
            FeedbackKind::Suggestion => "Suggestion",
            FeedbackKind::Issue => "Report Issue",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FeedbackKind::Suggestion => "What would you like to see improved?",
            FeedbackKind::Issue => "Describe the issue you encountered...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStatus {
    #[default]
    Idle,
    Submitting {
        since: Instant,
    },
    Success {
        since: Instant,
    },
}

/// The feedback dialog. Submission is simulated locally: a short
/// "submitting" phase, a success screen, then auto-close and reset.
#[derive(Debug, Clone, Default)]
pub struct FeedbackState {
    pub open: bool,
    pub kind: FeedbackKind,
    pub text: String,
    pub status: FeedbackStatus,
}

impl FeedbackState {
    pub fn submit(&mut self, now: Instant) {
        if self.text.trim().is_empty() {
            return;
        }
        self.status = FeedbackStatus::Submitting { since: now };
    }

    /// Drives the simulated submission. Returns true while a transition is
    /// pending so the owner keeps repainting.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.status {
            FeedbackStatus::Idle => false,
            FeedbackStatus::Submitting { since } => {
                if now.duration_since(since) >= SUBMIT_DURATION {
                    self.status = FeedbackStatus::Success { since: now };
                }
                true
            }
            FeedbackStatus::Success { since } => {
                if now.duration_since(since) >= SUCCESS_DURATION {
                    self.close();
                    false
                } else {
                    true
                }
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.status = FeedbackStatus::Idle;
        self.text.clear();
        self.kind = FeedbackKind::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_cannot_be_submitted() {
        let mut feedback = FeedbackState {
            open: true,
            text: "   ".to_string(),
            ..Default::default()
        };
        feedback.submit(Instant::now());
        assert_eq!(feedback.status, FeedbackStatus::Idle);
    }

    #[test]
    fn submission_walks_through_success_and_resets() {
        let t0 = Instant::now();
        let mut feedback = FeedbackState {
            open: true,
            kind: FeedbackKind::Issue,
            text: "panel flickers".to_string(),
            ..Default::default()
        };
        feedback.submit(t0);
        assert!(matches!(feedback.status, FeedbackStatus::Submitting { .. }));

        // Still submitting short of the simulated delay.
        assert!(feedback.advance(t0 + Duration::from_millis(1400)));
        assert!(matches!(feedback.status, FeedbackStatus::Submitting { .. }));

        let t1 = t0 + SUBMIT_DURATION;
        assert!(feedback.advance(t1));
        assert!(matches!(feedback.status, FeedbackStatus::Success { .. }));

        assert!(!feedback.advance(t1 + SUCCESS_DURATION));
        assert!(!feedback.open);
        assert_eq!(feedback.status, FeedbackStatus::Idle);
        assert!(feedback.text.is_empty());
        assert_eq!(feedback.kind, FeedbackKind::Suggestion);
    }
}
