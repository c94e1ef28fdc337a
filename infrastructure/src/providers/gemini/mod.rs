//! Gemini generator adapter

mod adapter;
mod types;

pub use adapter::{DEFAULT_GEMINI_BASE_URL, GeminiGenerator};
