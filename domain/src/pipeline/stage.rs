//! Pipeline stages

use serde::{Deserialize, Serialize};

/// Stage of a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// The generator drafts an answer
    Generate,
    /// The evaluator reviews and improves the draft
    Evaluate,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Generate => "generate",
            Stage::Evaluate => "evaluate",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Generate => "Generating answer",
            Stage::Evaluate => "Evaluating answer",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
