//! Pipeline value objects - immutable results of one turn.
//!
//! - [`Generation`] - what the generator produced
//! - [`Fallback`] - which recovery path a turn took
//! - [`TurnOutcome`] - full record of one turn

use crate::prompt::MALFORMED_RESPONSE_SENTINEL;
use serde::{Deserialize, Serialize};

/// Output of a successful generator call
///
/// `MalformedShape` covers an HTTP success whose body lacks the expected
/// text path. Callers normally collapse it with [`Generation::into_text`],
/// after which it is indistinguishable from a real answer that happens to
/// equal the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    MalformedShape,
}

impl Generation {
    pub fn into_text(self) -> String {
        match self {
            Generation::Text(text) => text,
            Generation::MalformedShape => MALFORMED_RESPONSE_SENTINEL.to_string(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Generation::MalformedShape)
    }
}

/// Recovery path taken during a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Both calls succeeded
    None,
    /// Generator failed; the apology text went through evaluation
    GeneratorApology,
    /// Evaluator failed; the draft is shown unevaluated
    Unevaluated,
    /// Generator and evaluator both failed; the raw apology is shown
    Both,
}

/// Everything one orchestrated turn produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The raw user input
    pub input: String,
    /// Generator output, the sentinel, or the apology
    pub initial_response: String,
    /// Text recorded as the assistant turn and shown to the user
    pub final_answer: String,
    pub fallback: Fallback,
}

impl TurnOutcome {
    pub fn new(
        input: impl Into<String>,
        initial_response: impl Into<String>,
        final_answer: impl Into<String>,
        fallback: Fallback,
    ) -> Self {
        Self {
            input: input.into(),
            initial_response: initial_response.into(),
            final_answer: final_answer.into(),
            fallback,
        }
    }

    /// Whether the final answer went through the evaluator
    pub fn was_evaluated(&self) -> bool {
        matches!(self.fallback, Fallback::None | Fallback::GeneratorApology)
    }

    /// Whether the draft is the apology text rather than a generator answer
    pub fn generator_failed(&self) -> bool {
        matches!(self.fallback, Fallback::GeneratorApology | Fallback::Both)
    }
}
