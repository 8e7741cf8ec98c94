//! Per-frame metrics.

use turing_stepper::StepMetrics;

/// Work and timing collected during one [`Session::frame`](crate::Session::frame)
/// or [`Session::update`](crate::Session::update) call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    /// Frame number, counting from 1 since the session was created.
    pub frame: u64,
    /// Brush injections applied this frame.
    pub injections: usize,
    /// Cells written by those injections (overlaps counted twice).
    pub cells_seeded: usize,
    /// Stepper metrics, or `None` while paused.
    pub step: Option<StepMetrics>,
    /// Time spent writing pixels, in microseconds. Zero for `update`.
    pub render_us: u64,
}
