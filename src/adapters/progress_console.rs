//! Progress reporting on stdout.

use tracing::debug;

use crate::ports::ProgressSink;

/// Prints `[step/total] label` for every step.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    total: usize,
    current: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line printed for the current step.
    fn line(&self, label: &str) -> String {
        format!("[{}/{}] {}", self.current.min(self.total), self.total, label)
    }
}

impl ProgressSink for ConsoleProgress {
    fn set_total_steps(&mut self, steps: usize) {
        debug!(steps, "generation steps");
        self.total = steps;
        self.current = 0;
    }

    fn advance(&mut self, label: &str) {
        self.current += 1;
        println!("{}", self.line(label));
    }
}
