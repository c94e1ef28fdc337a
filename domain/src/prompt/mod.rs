//! Prompt domain
//!
//! Fixed templates for the generator and evaluator stages, plus the
//! fallback texts the pipeline substitutes on failure.

mod template;

pub use template::{GENERATOR_APOLOGY, MALFORMED_RESPONSE_SENTINEL, PromptTemplate};
