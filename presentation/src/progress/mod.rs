//! Progress reporting for the generate/evaluate stages

pub mod reporter;
