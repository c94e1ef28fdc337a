//! Together.ai evaluator adapter

mod adapter;
mod types;

pub use adapter::{DEFAULT_TOGETHER_URL, TogetherEvaluator};
