use std::fmt;

/// One of the five gated investigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Step {
    Clues = 0,
    Witnesses,
    Timeline,
    Culprit,
    Fix,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Self::Clues,
        Self::Witnesses,
        Self::Timeline,
        Self::Culprit,
        Self::Fix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Clues => "clues",
            Self::Witnesses => "witnesses",
            Self::Timeline => "timeline",
            Self::Culprit => "culprit",
            Self::Fix => "fix",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The subset of steps currently permitted to be performed.
/// Grows monotonically within a session; cleared on case (re)start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSet(u8);

impl StepSet {
    pub const EMPTY: StepSet = StepSet(0);
    pub const ALL: StepSet = StepSet(0b1_1111);

    pub fn contains(self, step: Step) -> bool {
        self.0 & step.bit() != 0
    }

    pub fn insert(&mut self, step: Step) {
        self.0 |= step.bit();
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained steps in graph order.
    pub fn iter(self) -> impl Iterator<Item = Step> {
        Step::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl fmt::Display for StepSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "{{")?;
        for step in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{step}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Structured result of one engine operation, handed to the rendering
/// collaborator. The engine itself never touches a display surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionReport {
    /// Text revealed by this operation (clue, witness lines, fixed code, ...).
    pub revealed: Option<String>,
    /// The unlock set after the operation.
    pub unlocked: StepSet,
    /// Points awarded by this operation.
    pub score_delta: u32,
    /// One-shot feedback line for the player.
    pub feedback: Option<String>,
    /// Whether a submitted guess matched (answer operations only).
    pub matched: Option<bool>,
}
