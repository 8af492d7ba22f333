pub mod answer;
pub mod api;
pub mod cases;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::session::CaseSession;
pub use api::types::{ActionReport, Step, StepSet};
pub use cases::manifest::CaseFile;
pub use cases::registry::CaseRegistry;
pub use core::progress::{
    witnesses_unlock_at, ANSWER_POINTS, CLUE_POINTS, CULPRIT_POINTS, FIX_POINTS,
    TIMELINE_POINTS, WITNESS_POINTS,
};
pub use core::state::InvestigationState;
pub use error::EngineError;
pub use input::actions::{ActionQueue, PlayerAction};
pub use renderer::instance::{ParticleBuffer, ParticleInstance};
pub use systems::effects::{
    BurstConfig, EffectsFrame, EffectsState, FadeMode, Hue, LaunchMode, Launcher,
    Particle, ParticleColorMode, Rng, Rocket, FIREWORK_HUES, HEART_HUES,
};

// Extensions — decoupled optional systems
pub use extensions::{RevealState, RevealUpdate, TargetId};
