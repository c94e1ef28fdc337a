//! Credential lookup from the process environment

mod env;

pub use env::{EVALUATOR_KEY_VARS, EnvCredentialSource, GENERATOR_KEY_VARS};
