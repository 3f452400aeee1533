//! Console progress bar.

use std::io::{self, IsTerminal, Write};

/// Progress bar redrawn in place on stderr.
#[derive(Debug)]
pub struct ProgressBar {
    label: String,
    total: usize,
    width: usize,
    enabled: bool,
}

impl ProgressBar {
    /// Redraw every this many steps, plus on the last one.
    pub const STEP: usize = 100;

    /// Create a bar. Drawing is disabled when stderr is not a terminal.
    pub fn new(label: impl Into<String>, total: usize) -> Self {
        Self {
            label: label.into(),
            total,
            width: 50,
            enabled: io::stderr().is_terminal(),
        }
    }

    /// Force drawing on or off.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled && io::stderr().is_terminal();
        self
    }

    /// Render the bar for `current` completed steps.
    pub fn render(&self, current: usize) -> String {
        let progress = if self.total == 0 {
            1.0
        } else {
            current.min(self.total) as f64 / self.total as f64
        };
        let filled = (progress * self.width as f64 + 0.5) as usize;

        format!(
            "{:<30}: [{}{}] {:>3}% ({}/{})",
            self.label,
            "#".repeat(filled),
            ".".repeat(self.width - filled),
            (progress * 100.0) as usize,
            current,
            self.total
        )
    }

    /// Redraw for `current` completed steps, if due.
    pub fn update(&self, current: usize) {
        if !self.enabled || self.total == 0 {
            return;
        }
        if current % Self::STEP != 0 && current < self.total {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\r{}", self.render(current));
        if current >= self.total {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    }
}
