//! Progress reporting for long-running shell actions

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_TEMPLATE: &str = "{spinner:.blue} {msg} [{bar:40.cyan/blue}] {percent}%";

pub trait ProgressReporter: Send + Sync {
    fn start(&self, label: &str, steps: u64);
    fn advance(&self, position: u64);
    fn finish(&self, message: &str);
}

/// Reporter that ignores every event.
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&self, _label: &str, _steps: u64) {}
    fn advance(&self, _position: u64) {}
    fn finish(&self, _message: &str) {}
}

/// Terminal progress bar.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        bar.set_style(style);
        Self { bar }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for BarProgress {
    fn start(&self, label: &str, steps: u64) {
        // The same bar serves every phase of a command.
        self.bar.reset();
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
        self.bar.set_length(steps);
        self.bar.set_message(label.to_string());
    }

    fn advance(&self, position: u64) {
        self.bar.set_position(position);
    }

    fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
