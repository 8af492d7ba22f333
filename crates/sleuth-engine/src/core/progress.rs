//! The five-step unlock graph: clue reveal, witness interview, timeline,
//! culprit reveal, fix. Pure transitions over caller-owned state.

use crate::api::types::{ActionReport, Step};
use crate::cases::manifest::CaseFile;
use crate::core::state::InvestigationState;
use crate::error::EngineError;

pub const CLUE_POINTS: u32 = 10;
pub const WITNESS_POINTS: u32 = 15;
pub const TIMELINE_POINTS: u32 = 15;
pub const CULPRIT_POINTS: u32 = 20;
pub const FIX_POINTS: u32 = 40;
/// Awarded for a matching culprit guess.
pub const ANSWER_POINTS: u32 = 50;

const NO_MORE_CLUES: &str =
    "No more clues. Try interviewing witnesses or reconstructing the timeline.";

/// Clue count after which the witness step opens up.
pub fn witnesses_unlock_at(clue_count: usize) -> usize {
    clue_count.div_ceil(2)
}

/// Perform one gated step. Fails with `StepLocked` (state untouched) when the
/// step is not in the unlock set; otherwise applies the transition and
/// returns what was revealed, the new unlock set, and the score delta.
pub fn advance(
    case: &CaseFile,
    state: &mut InvestigationState,
    step: Step,
) -> Result<ActionReport, EngineError> {
    if !state.is_unlocked(step) {
        return Err(EngineError::StepLocked(step));
    }

    let report = match step {
        Step::Clues => next_clue(case, state),
        Step::Witnesses => {
            let lines: Vec<String> =
                case.witnesses.iter().map(|w| format!("• {w}")).collect();
            state.witnesses_shown = true;
            state.add_score(WITNESS_POINTS);
            state.unlock(Step::Timeline);
            ActionReport {
                revealed: Some(lines.join("\n")),
                unlocked: state.unlocked,
                score_delta: WITNESS_POINTS,
                ..Default::default()
            }
        }
        Step::Timeline => {
            let lines: Vec<String> =
                case.timeline.iter().map(|t| format!("→ {t}")).collect();
            state.timeline_shown = true;
            state.add_score(TIMELINE_POINTS);
            state.unlock(Step::Culprit);
            ActionReport {
                revealed: Some(lines.join("\n")),
                unlocked: state.unlocked,
                score_delta: TIMELINE_POINTS,
                ..Default::default()
            }
        }
        Step::Culprit => {
            // The true culprit is always shown in the clear; the Spoiler
            // Shield never applies to this reveal.
            state.culprit_shown = true;
            state.add_score(CULPRIT_POINTS);
            state.unlock(Step::Fix);
            ActionReport {
                revealed: Some(format!("Culprit: {}", case.culprit)),
                unlocked: state.unlocked,
                score_delta: CULPRIT_POINTS,
                ..Default::default()
            }
        }
        Step::Fix => {
            // Terminal step; nothing further unlocks.
            state.fixed = true;
            state.add_score(FIX_POINTS);
            ActionReport {
                revealed: Some(case.code_fixed.clone()),
                unlocked: state.unlocked,
                score_delta: FIX_POINTS,
                ..Default::default()
            }
        }
    };
    Ok(report)
}

fn next_clue(case: &CaseFile, state: &mut InvestigationState) -> ActionReport {
    if state.clues_revealed < case.clues.len() {
        let clue = case.clues[state.clues_revealed].clone();
        state.clues_revealed += 1;
        state.add_score(CLUE_POINTS);
        if state.clues_revealed >= witnesses_unlock_at(case.clues.len()) {
            state.unlock(Step::Witnesses);
        }
        ActionReport {
            revealed: Some(clue),
            unlocked: state.unlocked,
            score_delta: CLUE_POINTS,
            ..Default::default()
        }
    } else {
        // Clues exhausted: no points, but don't leave the player stuck.
        state.unlock(Step::Witnesses);
        ActionReport {
            revealed: Some(NO_MORE_CLUES.to_owned()),
            unlocked: state.unlocked,
            score_delta: 0,
            ..Default::default()
        }
    }
}
