use crate::api::types::{Step, StepSet};

/// Mutable per-session investigation state, owned by the caller and passed
/// into each engine operation. One instance per active session; no globals.
#[derive(Debug, Clone, Default)]
pub struct InvestigationState {
    /// Id of the case under investigation, if any.
    pub active_case_id: Option<String>,
    /// How many clues have been revealed so far. Never exceeds the case's
    /// clue count.
    pub clues_revealed: usize,
    pub witnesses_shown: bool,
    pub timeline_shown: bool,
    pub culprit_shown: bool,
    pub fixed: bool,
    /// Cumulative score. Deliberately NOT cleared on case (re)start; the
    /// score carries across cases within a session.
    pub score: u32,
    /// Steps currently permitted. Grows monotonically until the next
    /// (re)start.
    pub unlocked: StepSet,
    /// Whether any answer has been submitted for the active case.
    pub answer_submitted: bool,
    /// Whether a submitted answer matched an accepted one.
    pub answered_correctly: bool,
}

impl InvestigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every per-case field for a fresh run of `case_id`.
    /// The cumulative score is preserved.
    pub fn start_case(&mut self, case_id: &str) {
        self.active_case_id = Some(case_id.to_owned());
        self.clues_revealed = 0;
        self.witnesses_shown = false;
        self.timeline_shown = false;
        self.culprit_shown = false;
        self.fixed = false;
        self.unlocked = StepSet::EMPTY;
        self.answer_submitted = false;
        self.answered_correctly = false;
    }

    pub fn is_unlocked(&self, step: Step) -> bool {
        self.unlocked.contains(step)
    }

    pub fn unlock(&mut self, step: Step) {
        self.unlocked.insert(step);
    }

    /// Permit every step at once (full spoiler skip).
    pub fn unlock_all(&mut self) {
        self.unlocked = StepSet::ALL;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}
