//! Prompt templates for the generate → evaluate flow

/// Text used as the draft answer when the generator call fails
pub const GENERATOR_APOLOGY: &str = "Lo siento, no pude generar una respuesta en este momento.";

/// Text returned in place of the draft when the generator answers with an
/// unexpected JSON shape
pub const MALFORMED_RESPONSE_SENTINEL: &str = "Error: unexpected response format";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for the generator stage. Built from the latest input only.
    pub fn generator_prompt(user_input: &str) -> String {
        format!("Genera una respuesta detallada para: {}", user_input)
    }

    /// Prompt for the evaluator stage, wrapping the draft answer
    pub fn evaluator_prompt(initial_response: &str) -> String {
        format!(
            "Evalúa esta respuesta y implementa mejoras/optimizaciones: {}",
            initial_response
        )
    }
}
