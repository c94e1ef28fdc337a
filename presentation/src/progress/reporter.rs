//! Progress reporting while a turn runs

use colored::Colorize;
use duo_application::ProgressNotifier;
use duo_domain::{Model, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner for the stage currently waiting on the network
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_short_name(stage: Stage) -> &'static str {
        match stage {
            Stage::Generate => "Draft",
            Stage::Evaluate => "Review",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(stage.display_name().to_string());
        pb.set_message(model.to_string().dimmed().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.spinner.lock().unwrap().replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            let name = Self::stage_short_name(stage);
            if success {
                pb.finish_with_message(format!("{} {}", "v".green(), name));
            } else {
                pb.finish_with_message(format!("{} {} failed, falling back", "x".red(), name));
            }
        }
    }
}
