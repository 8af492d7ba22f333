use crate::api::types::Step;

/// Recoverable engine failures. Each variant's `Display` text doubles as the
/// feedback line shown to the player; a failed operation leaves state
/// untouched and is surfaced once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// `advance` was called on a step not yet in the unlock set.
    #[error("The {0} step is still locked.")]
    StepLocked(Step),

    /// The guess normalized to fewer than 2 characters.
    #[error("Please enter a bit more detail for your guess.")]
    GuessTooShort,

    /// The operation needs an active case and none is selected.
    #[error("Select a case first.")]
    NoActiveCase,

    /// Skip requested before any answer was submitted.
    #[error("Please submit an answer first.")]
    AnswerRequired,

    /// The registry holds no cases at all.
    #[error("No cases are available.")]
    NoCases,

    /// Case data could not be parsed.
    #[error("Invalid case data: {0}")]
    CaseLoad(String),
}
