//! The case-side facade: owns the loaded registry and the caller's
//! investigation state, and exposes every player-facing operation as a
//! pure state transition returning an `ActionReport` for the renderer.

use crate::answer::{matcher, spoiler};
use crate::api::types::{ActionReport, Step, StepSet};
use crate::cases::manifest::CaseFile;
use crate::cases::registry::CaseRegistry;
use crate::core::progress::{self, ANSWER_POINTS};
use crate::core::state::InvestigationState;
use crate::error::EngineError;

const START_PROMPT: &str = "Enter your answer above to begin the investigation.";
const CORRECT_FEEDBACK: &str = "Correct! You identified the culprit.";
const INCORRECT_FEEDBACK: &str = "Not quite. Try the investigation or refine your guess.";
const SKIP_FEEDBACK: &str = "Investigation unlocked. Start with clues.";

/// One player's session: the immutable case set plus mutable progress.
pub struct CaseSession {
    registry: CaseRegistry,
    state: InvestigationState,
}

impl CaseSession {
    pub fn new(registry: CaseRegistry) -> Self {
        Self {
            registry,
            state: InvestigationState::new(),
        }
    }

    pub fn registry(&self) -> &CaseRegistry {
        &self.registry
    }

    pub fn state(&self) -> &InvestigationState {
        &self.state
    }

    pub fn active_case(&self) -> Option<&CaseFile> {
        self.state
            .active_case_id
            .as_deref()
            .and_then(|id| self.registry.get(id))
    }

    /// Begin (or restart) a case. Unknown ids fall back to the first case;
    /// an empty registry reports that no cases are available. Progress is
    /// wiped, the unlock set emptied; the cumulative score is kept.
    pub fn start(&mut self, case_id: Option<&str>) -> Result<ActionReport, EngineError> {
        let case = self.registry.resolve(case_id).ok_or(EngineError::NoCases)?;
        let id = case.id.clone();
        log::info!("starting case {id}");
        self.state.start_case(&id);
        Ok(ActionReport {
            unlocked: StepSet::EMPTY,
            feedback: Some(START_PROMPT.to_owned()),
            ..Default::default()
        })
    }

    /// Restart the active case from scratch.
    pub fn reset(&mut self) -> Result<ActionReport, EngineError> {
        let id = self
            .state
            .active_case_id
            .clone()
            .ok_or(EngineError::NoActiveCase)?;
        self.start(Some(&id))
    }

    /// Perform one gated investigation step.
    pub fn advance(&mut self, step: Step) -> Result<ActionReport, EngineError> {
        let id = self
            .state
            .active_case_id
            .as_deref()
            .ok_or(EngineError::NoActiveCase)?;
        let case = self.registry.get(id).ok_or(EngineError::NoActiveCase)?;
        let report = progress::advance(case, &mut self.state, step)?;
        log::debug!(
            "step {step}: +{} points, unlocked {}",
            report.score_delta,
            report.unlocked
        );
        Ok(report)
    }

    /// Check a free-text culprit guess. Too-short guesses fail softly
    /// without counting as a submission; everything else marks the answer
    /// phase as attempted. A match awards points but unlocks nothing;
    /// entering the step graph is always the explicit skip action.
    pub fn submit_answer(&mut self, raw: &str) -> Result<ActionReport, EngineError> {
        let case = self.active_case().ok_or(EngineError::NoActiveCase)?;
        if matcher::normalize(raw).len() < 2 {
            return Err(EngineError::GuessTooShort);
        }

        let matched = matcher::is_match(raw, &case.answers);
        self.state.answer_submitted = true;
        if matched {
            self.state.answered_correctly = true;
            self.state.add_score(ANSWER_POINTS);
            Ok(ActionReport {
                unlocked: self.state.unlocked,
                score_delta: ANSWER_POINTS,
                feedback: Some(CORRECT_FEEDBACK.to_owned()),
                matched: Some(true),
                ..Default::default()
            })
        } else {
            Ok(ActionReport {
                unlocked: self.state.unlocked,
                feedback: Some(INCORRECT_FEEDBACK.to_owned()),
                matched: Some(false),
                ..Default::default()
            })
        }
    }

    /// Leave the answer phase for the step graph. A correct answer opens
    /// every step at once (full spoiler skip); an incorrect one opens only
    /// the clue trail.
    pub fn skip_to_investigation(&mut self) -> Result<ActionReport, EngineError> {
        if self.state.active_case_id.is_none() {
            return Err(EngineError::NoActiveCase);
        }
        if !self.state.answer_submitted {
            return Err(EngineError::AnswerRequired);
        }
        if self.state.answered_correctly {
            self.state.unlock_all();
        } else {
            self.state.unlock(Step::Clues);
        }
        Ok(ActionReport {
            unlocked: self.state.unlocked,
            feedback: Some(SKIP_FEEDBACK.to_owned()),
            ..Default::default()
        })
    }

    /// Masking keywords for the active case, for the spoiler-shield
    /// collaborator (accepted answers, title words, fixed extra terms).
    pub fn spoiler_keywords(&self) -> Option<Vec<String>> {
        self.active_case().map(spoiler::keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CaseRegistry {
        CaseRegistry::from_json(
            r#"[{
                "id": "case-npe",
                "title": "The Null Pointer Mystery",
                "description": "Something was nothing all along.",
                "codeBuggy": "user.name // boom",
                "codeFixed": "user?.name",
                "clues": ["Clue A", "Clue B", "Clue C", "Clue D"],
                "witnesses": ["The stack trace"],
                "timeline": ["09:00 deploy", "09:01 crash"],
                "culprit": "A null pointer exception",
                "answers": ["null pointer exception"]
            }]"#,
        )
        .unwrap()
    }

    fn started_session() -> CaseSession {
        let mut session = CaseSession::new(registry());
        session.start(None).unwrap();
        session
    }

    #[test]
    fn empty_registry_reports_no_cases() {
        let mut session = CaseSession::new(CaseRegistry::new());
        assert_eq!(session.start(None).unwrap_err(), EngineError::NoCases);
    }

    #[test]
    fn operations_require_an_active_case() {
        let mut session = CaseSession::new(registry());
        assert_eq!(
            session.submit_answer("null pointer exception").unwrap_err(),
            EngineError::NoActiveCase
        );
        assert_eq!(
            session.advance(Step::Clues).unwrap_err(),
            EngineError::NoActiveCase
        );
        assert_eq!(session.reset().unwrap_err(), EngineError::NoActiveCase);
    }

    #[test]
    fn short_guess_asks_for_detail_without_counting() {
        let mut session = started_session();
        assert_eq!(
            session.submit_answer("x!").unwrap_err(),
            EngineError::GuessTooShort
        );
        assert!(!session.state().answer_submitted);
    }

    #[test]
    fn skip_before_submit_fails_and_unlocks_nothing() {
        let mut session = started_session();
        assert_eq!(
            session.skip_to_investigation().unwrap_err(),
            EngineError::AnswerRequired
        );
        assert!(session.state().unlocked.is_empty());
    }

    #[test]
    fn correct_answer_then_skip_unlocks_everything() {
        let mut session = started_session();
        let report = session.submit_answer("a null pointer exception!").unwrap();
        assert_eq!(report.matched, Some(true));
        assert_eq!(report.score_delta, 50);
        assert!(
            session.state().unlocked.is_empty(),
            "submit alone unlocks nothing"
        );

        let report = session.skip_to_investigation().unwrap();
        assert_eq!(report.unlocked, StepSet::ALL);
    }

    #[test]
    fn incorrect_answer_then_skip_unlocks_only_clues() {
        let mut session = started_session();
        let report = session.submit_answer("a race condition").unwrap();
        assert_eq!(report.matched, Some(false));
        assert_eq!(report.score_delta, 0);

        let report = session.skip_to_investigation().unwrap();
        assert!(report.unlocked.contains(Step::Clues));
        assert_eq!(report.unlocked.len(), 1);
    }

    #[test]
    fn four_clue_case_unlocks_witnesses_after_two_advances() {
        let mut session = started_session();
        session.submit_answer("wrong guess").unwrap();
        session.skip_to_investigation().unwrap();

        session.advance(Step::Clues).unwrap();
        assert!(!session.state().is_unlocked(Step::Witnesses));
        session.advance(Step::Clues).unwrap();

        assert_eq!(session.state().clues_revealed, 2);
        assert!(session.state().is_unlocked(Step::Witnesses));
        assert_eq!(session.state().score, 20);
    }

    #[test]
    fn reset_clears_unlocks_but_keeps_score() {
        let mut session = started_session();
        session.submit_answer("null pointer exception").unwrap();
        session.skip_to_investigation().unwrap();
        let score = session.state().score;
        assert!(score > 0);

        session.reset().unwrap();

        assert!(session.state().unlocked.is_empty());
        assert!(!session.state().answer_submitted);
        assert_eq!(session.state().score, score, "score survives reset");
    }

    #[test]
    fn locked_advance_changes_nothing() {
        let mut session = started_session();
        let err = session.advance(Step::Fix).unwrap_err();
        assert_eq!(err, EngineError::StepLocked(Step::Fix));
        assert_eq!(session.state().score, 0);
    }

    #[test]
    fn spoiler_keywords_cover_answers_and_title() {
        let session = started_session();
        let words = session.spoiler_keywords().unwrap();
        assert!(words.contains(&"null pointer exception".to_string()));
        assert!(words.contains(&"mystery".to_string()));
        assert!(words.contains(&"fencepost".to_string()));
    }
}
