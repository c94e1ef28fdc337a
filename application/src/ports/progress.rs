//! Progress notification port
//!
//! Defines the interface for reporting progress while a turn runs.

use duo_domain::{Model, Stage};

/// Callback for progress updates during a turn
///
/// Implementations live in the presentation layer (spinner, plain log, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the stage's outbound call
    fn on_stage_start(&self, stage: Stage, model: &Model);

    /// Called when the stage's call returned, successfully or not
    fn on_stage_complete(&self, stage: Stage, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _model: &Model) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
