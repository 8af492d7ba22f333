// Extensions — decoupled optional systems.
// Nothing in the core engines depends on anything here; these exist for the
// display collaborator's pacing effects.

pub mod reveal;

pub use reveal::{RevealState, RevealUpdate, TargetId};
