//! Model value object representing an LLM model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM model identifier (Value Object)
///
/// The generator and the evaluator each talk to one model. The well-known
/// identifiers get their own variants; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Gemini models (generator side)
    Gemini20ProExp,
    Gemini20Flash,
    Gemini15Pro,
    // Together.ai hosted models (evaluator side)
    DeepSeekR1,
    DeepSeekV3,
    Llama33Instruct,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini20ProExp => "gemini-2.0-pro-exp-02-05",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::DeepSeekR1 => "deepseek-ai/DeepSeek-R1",
            Model::DeepSeekV3 => "deepseek-ai/DeepSeek-V3",
            Model::Llama33Instruct => "meta-llama/Llama-3.3-70B-Instruct-Turbo",
            Model::Custom(s) => s,
        }
    }

    /// Default model for the generator stage
    pub fn default_generator() -> Model {
        Model::Gemini20ProExp
    }

    /// Default model for the evaluator stage
    pub fn default_evaluator() -> Model {
        Model::DeepSeekR1
    }

    /// Check if this is a Gemini model
    pub fn is_gemini(&self) -> bool {
        matches!(
            self,
            Model::Gemini20ProExp | Model::Gemini20Flash | Model::Gemini15Pro
        )
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.0-pro-exp-02-05" => Model::Gemini20ProExp,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "deepseek-ai/DeepSeek-R1" => Model::DeepSeekR1,
            "deepseek-ai/DeepSeek-V3" => Model::DeepSeekV3,
            "meta-llama/Llama-3.3-70B-Instruct-Turbo" => Model::Llama33Instruct,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
