//! HTTP adapters for the two LLM providers
//!
//! - [`gemini::GeminiGenerator`] - generator stage, Gemini `generateContent`
//! - [`together::TogetherEvaluator`] - evaluator stage, Together.ai chat completions

pub mod gemini;
pub mod together;

mod http;
