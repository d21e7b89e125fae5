use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(700);

/// A scheduled checkpoint: fires once `due` has passed, unless a newer edit
/// or an undo/redo replaces it first.
#[derive(Debug, Clone)]
struct PendingCommit<T> {
    due: Instant,
    value: T,
}

/// Debounced undo/redo buffer for a single editable value.
///
/// Edits update the live value immediately but only become checkpoints
/// after a quiet period with no further edits. The buffer never performs
/// I/O and never fails; `undo`/`redo` are no-ops when unavailable.
///
/// Time is passed in explicitly (`set`/`tick` take a `now`), so the commit
/// machinery is driven by the owner's frame loop and tests can use a
/// logical clock. Dropping the buffer drops any pending commit with it.
#[derive(Debug, Clone)]
pub struct History<T> {
    live: T,
    committed: T,
    past: Vec<T>,
    future: VecDeque<T>,
    pending: Option<PendingCommit<T>>,
    quiet_period: Duration,
}

pub type TextHistory = History<String>;

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_quiet_period(initial, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(initial: T, quiet_period: Duration) -> Self {
        Self {
            live: initial.clone(),
            committed: initial,
            past: Vec::new(),
            future: VecDeque::new(),
            pending: None,
            quiet_period,
        }
    }

    pub fn value(&self) -> &T {
        &self.live
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// When the currently scheduled commit is due, if any. Owners use the
    /// earliest deadline across buffers to schedule a wakeup.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Updates the live value immediately and (re)schedules the commit.
    /// Any previously scheduled commit is replaced, so a burst of edits
    /// inside one quiet period collapses into a single checkpoint.
    pub fn set(&mut self, value: T, now: Instant) {
        self.live = value.clone();
        self.pending = Some(PendingCommit {
            due: now + self.quiet_period,
            value,
        });
    }

    /// Fires the scheduled commit once its quiet period has elapsed.
    ///
    /// The checkpoint pushed onto `past` is the value committed *before*
    /// this batch of edits; the captured value becomes the new committed
    /// value. Redo history is invalidated here, not in `set`.
    pub fn tick(&mut self, now: Instant) {
        match self.pending.take() {
            Some(pending) if now >= pending.due => {
                let previous = std::mem::replace(&mut self.committed, pending.value);
                self.past.push(previous);
                self.future.clear();
            }
            other => self.pending = other,
        }
    }

    /// Steps back one checkpoint. An uncommitted in-flight edit is
    /// discarded from history consideration; its live value is pushed onto
    /// the redo queue before being overwritten.
    pub fn undo(&mut self) {
        let Some(previous) = self.past.pop() else {
            return;
        };
        self.pending = None;
        let current = std::mem::replace(&mut self.live, previous.clone());
        self.future.push_front(current);
        self.committed = previous;
    }

    pub fn redo(&mut self) {
        let Some(next) = self.future.pop_front() else {
            return;
        };
        self.pending = None;
        let current = std::mem::replace(&mut self.live, next.clone());
        self.past.push(current);
        self.committed = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(700);

    fn text_history(initial: &str) -> TextHistory {
        History::with_quiet_period(initial.to_string(), QUIET)
    }

    /// Shorthand: edit at `at`, then tick just past the quiet period.
    fn set_and_commit(h: &mut TextHistory, value: &str, at: Instant) -> Instant {
        h.set(value.to_string(), at);
        let after = at + QUIET;
        h.tick(after);
        after
    }

    #[test]
    fn fresh_buffer_has_no_history() {
        let h = text_history("");
        assert_eq!(h.value(), "");
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert!(h.pending_deadline().is_none());
    }

    #[test]
    fn set_updates_live_value_immediately() {
        let t0 = Instant::now();
        let mut h = text_history("");
        h.set("a".to_string(), t0);
        assert_eq!(h.value(), "a");
        // Not yet a checkpoint.
        assert!(!h.can_undo());
        assert_eq!(h.pending_deadline(), Some(t0 + QUIET));
    }

    #[test]
    fn tick_before_quiet_period_does_not_commit() {
        let t0 = Instant::now();
        let mut h = text_history("");
        h.set("a".to_string(), t0);
        h.tick(t0 + QUIET - Duration::from_millis(1));
        assert!(!h.can_undo());
        assert!(h.pending_deadline().is_some());
    }

    #[test]
    fn commit_fires_exactly_at_deadline() {
        let t0 = Instant::now();
        let mut h = text_history("");
        h.set("a".to_string(), t0);
        h.tick(t0 + QUIET);
        assert!(h.can_undo());
        assert!(h.pending_deadline().is_none());
        assert_eq!(h.committed, "a");
        assert_eq!(h.past, vec![""]);
    }

    #[test]
    fn spaced_edits_each_produce_a_checkpoint() {
        let t0 = Instant::now();
        let mut h = text_history("");
        let t1 = set_and_commit(&mut h, "a", t0);
        let t2 = set_and_commit(&mut h, "ab", t1);
        set_and_commit(&mut h, "abc", t2);
        assert_eq!(h.past, vec!["", "a", "ab"]);
        assert_eq!(h.committed, "abc");
        assert_eq!(h.value(), "abc");
    }

    #[test]
    fn rapid_edits_collapse_into_one_checkpoint() {
        // Construct with ""; set "a"; set "ab" before the quiet period
        // elapses; wait. The second edit replaced the first's pending
        // commit, so only one transition is recorded.
        let t0 = Instant::now();
        let mut h = text_history("");
        h.set("a".to_string(), t0);
        let t1 = t0 + Duration::from_millis(100);
        h.tick(t1);
        h.set("ab".to_string(), t1);
        h.tick(t1 + QUIET);
        assert_eq!(h.value(), "ab");
        assert_eq!(h.past, vec![""]);
        assert_eq!(h.committed, "ab");
        assert!(h.can_undo());
    }

    #[test]
    fn first_pending_commit_never_fires_after_replacement() {
        // The first edit's deadline passing means nothing once a second
        // edit rescheduled the commit.
        let t0 = Instant::now();
        let mut h = text_history("");
        h.set("a".to_string(), t0);
        let t1 = t0 + Duration::from_millis(650);
        h.set("ab".to_string(), t1);
        // Past the first deadline, before the second.
        h.tick(t0 + QUIET);
        assert!(!h.can_undo());
        assert_eq!(h.pending_deadline(), Some(t1 + QUIET));
    }

    #[test]
    fn uncommitted_edit_is_not_recorded() {
        let t0 = Instant::now();
        let mut h = text_history("");
        h.set("draft".to_string(), t0);
        // Buffer discarded before any quiet period: live value is visible,
        // history never learned of it.
        assert_eq!(h.value(), "draft");
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn undo_restores_previous_checkpoint() {
        let t0 = Instant::now();
        let mut h = text_history("");
        let t1 = set_and_commit(&mut h, "a", t0);
        set_and_commit(&mut h, "ab", t1);
        assert_eq!(h.past, vec!["", "a"]);

        h.undo();
        assert_eq!(h.value(), "a");
        assert_eq!(h.committed, "a");
        assert_eq!(h.past, vec![""]);
        assert_eq!(h.future, vec!["ab"]);

        h.undo();
        assert_eq!(h.value(), "");
        assert_eq!(h.past, Vec::<String>::new());
        assert_eq!(h.future, vec!["a", "ab"]);
        assert!(!h.can_undo());
        assert!(h.can_redo());
    }

    #[test]
    fn undo_on_empty_past_is_a_no_op() {
        let t0 = Instant::now();
        let mut h = text_history("x");
        h.set("y".to_string(), t0);
        h.undo();
        assert_eq!(h.value(), "y");
        assert!(!h.can_redo());
        // The pending commit survives an undo that did nothing.
        assert!(h.pending_deadline().is_some());
    }

    #[test]
    fn redo_on_empty_future_is_a_no_op() {
        let mut h = text_history("x");
        h.redo();
        assert_eq!(h.value(), "x");
        assert!(!h.can_undo());
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let t0 = Instant::now();
        let mut h = text_history("");
        let t1 = set_and_commit(&mut h, "a", t0);
        set_and_commit(&mut h, "ab", t1);
        let before = (h.value().clone(), h.past.clone(), h.future.clone());

        h.undo();
        h.redo();

        assert_eq!(h.value(), &before.0);
        assert_eq!(h.past, before.1);
        assert_eq!(h.future, before.2);
        assert_eq!(h.committed, "ab");
    }

    #[test]
    fn undo_discards_in_flight_edit() {
        let t0 = Instant::now();
        let mut h = text_history("");
        let t1 = set_and_commit(&mut h, "a", t0);
        h.set("a draft".to_string(), t1);
        h.undo();
        // The in-flight edit lands on the redo queue as the live value it
        // was, but its scheduled commit is gone.
        assert_eq!(h.value(), "");
        assert_eq!(h.future, vec!["a draft"]);
        assert!(h.pending_deadline().is_none());
        // A late tick must not resurrect it.
        h.tick(t1 + QUIET * 2);
        assert_eq!(h.committed, "");
        assert_eq!(h.past, Vec::<String>::new());
    }

    #[test]
    fn edit_after_undo_invalidates_redo_at_commit_time() {
        // setValue(a) -> commit -> setValue(b) -> commit -> undo() ->
        // setValue(c): redo must be unavailable once c's commit fires.
        let t0 = Instant::now();
        let mut h = text_history("");
        let t1 = set_and_commit(&mut h, "a", t0);
        let t2 = set_and_commit(&mut h, "b", t1);
        h.undo();
        assert!(h.can_redo());

        h.set("c".to_string(), t2);
        // Redo survives until the divergent edit actually commits.
        assert!(h.can_redo());
        h.tick(t2 + QUIET);
        assert!(!h.can_redo());
        assert_eq!(h.future, VecDeque::<String>::new());
        assert_eq!(h.past, vec!["", "a"]);
        assert_eq!(h.committed, "c");
    }

    #[test]
    fn redo_walks_forward_through_checkpoints() {
        let t0 = Instant::now();
        let mut h = text_history("");
        let t1 = set_and_commit(&mut h, "a", t0);
        set_and_commit(&mut h, "ab", t1);
        h.undo();
        h.undo();

        h.redo();
        assert_eq!(h.value(), "a");
        assert_eq!(h.past, vec![""]);
        assert_eq!(h.future, vec!["ab"]);

        h.redo();
        assert_eq!(h.value(), "ab");
        assert_eq!(h.past, vec!["", "a"]);
        assert!(!h.can_redo());
    }

    #[test]
    fn commit_pushes_pre_edit_committed_value() {
        // The checkpoint recorded is the value *before* the batch of
        // edits, so undo restores to it. Easy to invert by accident.
        let t0 = Instant::now();
        let mut h = text_history("one");
        set_and_commit(&mut h, "two", t0);
        assert_eq!(h.past, vec!["one"]);
        h.undo();
        assert_eq!(h.value(), "one");
    }

    #[test]
    fn commit_of_unchanged_value_is_still_recorded() {
        // No equality check: reverting to the committed value within one
        // quiet period still appends a checkpoint when the timer fires.
        let t0 = Instant::now();
        let mut h = text_history("");
        let t1 = set_and_commit(&mut h, "a", t0);
        h.set("ax".to_string(), t1);
        let t2 = t1 + Duration::from_millis(200);
        h.set("a".to_string(), t2);
        h.tick(t2 + QUIET);
        assert_eq!(h.past, vec!["", "a"]);
        assert_eq!(h.committed, "a");
    }

    #[test]
    fn quiet_period_is_configurable() {
        let t0 = Instant::now();
        let short = Duration::from_millis(50);
        let mut h = History::with_quiet_period(String::new(), short);
        h.set("a".to_string(), t0);
        h.tick(t0 + Duration::from_millis(49));
        assert!(!h.can_undo());
        h.tick(t0 + short);
        assert!(h.can_undo());
    }

    #[test]
    fn generalizes_beyond_strings() {
        let t0 = Instant::now();
        let mut h: History<u32> = History::with_quiet_period(0, QUIET);
        h.set(7, t0);
        h.tick(t0 + QUIET);
        h.undo();
        assert_eq!(*h.value(), 0);
        h.redo();
        assert_eq!(*h.value(), 7);
    }
}
