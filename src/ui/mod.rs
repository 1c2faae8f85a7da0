//! Progress presentation layer
//!
//! This module handles:
//! - A spinner on stderr while a long-running `git` command blocks
//! - Silent progress for tests and non-interactive use
//!
//! The per-object `.` markers of the classifier are part of its report and
//! are written by the operation itself, not through this trait.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use miette::Diagnostic;

use crate::error::SweepError;

/// Print a fatal error and its help text to stderr
pub fn print_error(err: &SweepError) {
    let label = Style::new().red().bold().for_stderr();
    eprintln!("{} {}", label.apply_to("Error:"), err);
    if let Some(help) = err.help() {
        eprintln!("  {} {}", Style::new().cyan().for_stderr().apply_to("help:"), help);
    }
}

/// Progress reporter for blocking `git` steps
pub trait ProgressReporter {
    /// A blocking step begins
    fn start_step(&mut self, message: &str);

    /// The current step has finished
    fn finish_step(&mut self);
}

/// Spinner on stderr, hidden automatically when stderr is not a terminal
#[derive(Default)]
pub struct InteractiveProgressReporter {
    spinner: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_step(&mut self, message: &str) {
        self.finish_step();

        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(spinner);
    }

    fn finish_step(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for InteractiveProgressReporter {
    fn drop(&mut self) {
        self.finish_step();
    }
}

/// No-op progress reporter
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_step(&mut self, _message: &str) {}

    fn finish_step(&mut self) {}
}
