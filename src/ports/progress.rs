//! Progress reporting port.

/// Receives step counts and step labels while a solution is written.
///
/// Called inline on the generating thread between steps.
pub trait ProgressSink {
    /// Announce the number of steps the run expects.
    fn set_total_steps(&mut self, steps: usize);

    /// Report that the step described by `label` is starting.
    fn advance(&mut self, label: &str);
}

/// Progress sink that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn set_total_steps(&mut self, _steps: usize) {}

    fn advance(&mut self, _label: &str) {}
}
