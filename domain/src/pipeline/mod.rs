//! Pipeline domain - the two-stage generate/evaluate flow.
//!
//! - [`stage::Stage`] - which call of a turn is running
//! - [`value_objects::Generation`] - generator output, with the malformed-shape case
//! - [`value_objects::TurnOutcome`] - everything one orchestrated turn produced

pub mod stage;
pub mod value_objects;
