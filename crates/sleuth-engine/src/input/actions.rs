use crate::api::types::Step;

/// Discrete user actions the host UI feeds into the engines.
/// Generic — no widget or canvas semantics.
#[derive(Debug, Clone)]
pub enum PlayerAction {
    /// Begin (or restart) a case; `None` selects the first available one.
    StartCase { case_id: Option<String> },
    /// Perform a gated investigation step.
    Advance(Step),
    /// Submit a free-text culprit guess.
    SubmitAnswer(String),
    /// Trade the answer phase for the step graph.
    SkipToInvestigation,
    /// Restart the active case.
    Reset,
    /// Burst particles at a point (canvas click).
    Burst { x: f32, y: f32 },
    /// Send a firework rocket up from a point.
    Launch { x: f32, y: f32 },
}

/// A queue of player actions. The UI layer writes actions in; the host
/// drains them each frame and routes them to the session or the effects.
pub struct ActionQueue {
    actions: Vec<PlayerAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self {
            actions: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, action: PlayerAction) {
        self.actions.push(action);
    }

    /// Drain all pending actions. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<PlayerAction> {
        std::mem::take(&mut self.actions)
    }

    /// Iterate over pending actions without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerAction> {
        self.actions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
