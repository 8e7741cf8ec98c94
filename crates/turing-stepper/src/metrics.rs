//! Per-call stepper metrics.

/// Work and timing collected during one [`GrayScott::step`](crate::GrayScott::step) call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Iterations executed (each one ends in a swap).
    pub iterations: u32,
    /// Interior cells computed, summed over all iterations.
    pub cells_updated: usize,
    /// Whether the rayon row-parallel path was used.
    pub parallel: bool,
    /// Wall-clock time for the whole call, in microseconds.
    pub total_us: u64,
}
