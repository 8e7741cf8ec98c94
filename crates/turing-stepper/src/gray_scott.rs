//! The Gray-Scott stepper.

use std::time::Instant;

use log::trace;
use rayon::prelude::*;
use turing_core::{GridDims, ReactionParams, Species};
use turing_grid::{Generation, Grid, StepGuard};

use crate::metrics::StepMetrics;
use crate::stencil::laplacian;

/// Scale applied to every rate of change (fixed implicit timestep of 0.9).
pub const DAMPING: f32 = 0.9;

/// Interior cell count from which [`Execution::Auto`] goes parallel.
pub const PARALLEL_CELL_THRESHOLD: usize = 65_536;

/// How interior rows are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Execution {
    /// One thread, rows in order.
    Serial,
    /// Rows fanned out over the rayon global pool.
    Parallel,
    /// Parallel once the interior reaches [`PARALLEL_CELL_THRESHOLD`] cells.
    #[default]
    Auto,
}

impl Execution {
    /// Resolve to a concrete choice for a grid of the given size.
    pub fn is_parallel(self, dims: GridDims) -> bool {
        match self {
            Execution::Serial => false,
            Execution::Parallel => true,
            Execution::Auto => dims.interior_cell_count() >= PARALLEL_CELL_THRESHOLD,
        }
    }
}

/// Clamp into `[0, 1]`. NaN collapses to `0.0`.
#[inline]
fn clamp_unit(v: f32) -> f32 {
    v.max(0.0).min(1.0)
}

/// New `(A, B)` for one cell from its concentrations and Laplacians.
#[inline]
pub fn update_cell(
    a: f32,
    b: f32,
    lap_a: f32,
    lap_b: f32,
    params: &ReactionParams,
) -> (f32, f32) {
    let reaction = a * b * b;
    let da = params.d_a * lap_a - reaction + params.feed * (1.0 - a);
    let db = params.d_b * lap_b + reaction - (params.kill + params.feed) * b;
    (clamp_unit(a + DAMPING * da), clamp_unit(b + DAMPING * db))
}

/// Compute interior cells `1..width-1` of row `y` into the row slices
/// `next_a` / `next_b` (each exactly `width` long).
fn update_row(
    live_a: &[f32],
    live_b: &[f32],
    width: usize,
    y: usize,
    next_a: &mut [f32],
    next_b: &mut [f32],
    params: &ReactionParams,
) {
    let row = y * width;
    for x in 1..width - 1 {
        let i = row + x;
        let (a, b) = update_cell(
            live_a[i],
            live_b[i],
            laplacian(live_a, width, i),
            laplacian(live_b, width, i),
            params,
        );
        next_a[x] = a;
        next_b[x] = b;
    }
}

/// Gray-Scott stepper with a configurable row schedule.
///
/// Holds no simulation state; parameters arrive with every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrayScott {
    execution: Execution,
}

impl GrayScott {
    /// Create a stepper with the given row schedule.
    pub fn new(execution: Execution) -> Self {
        Self { execution }
    }

    /// The configured row schedule.
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Advance `grid` by `iterations` steps.
    ///
    /// Each iteration reads the generation produced by the previous one.
    /// Border cells keep their values. `iterations == 0` does nothing.
    pub fn step(&self, grid: &mut Grid, params: &ReactionParams, iterations: u32) -> StepMetrics {
        let start = Instant::now();
        let dims = grid.dims();
        let parallel = self.execution.is_parallel(dims);

        for _ in 0..iterations {
            let guard = grid.begin_step();
            if dims.has_interior() {
                if parallel {
                    advance_parallel(guard, params);
                } else {
                    advance_serial(guard, params);
                }
            }
            grid.publish();
        }

        let metrics = StepMetrics {
            iterations,
            cells_updated: dims.interior_cell_count() * iterations as usize,
            parallel,
            total_us: start.elapsed().as_micros() as u64,
        };
        trace!(
            "stepped {}x{} grid: {} iterations, {} cells, parallel={}, {}us",
            dims.width(),
            dims.height(),
            metrics.iterations,
            metrics.cells_updated,
            metrics.parallel,
            metrics.total_us
        );
        metrics
    }
}

/// Interior slice bounds: rows `1..height-1` of a row-major field.
fn interior_rows(dims: GridDims) -> std::ops::Range<usize> {
    let width = dims.width() as usize;
    width..(dims.height() as usize - 1) * width
}

fn split(live: &Generation) -> (&[f32], &[f32]) {
    (live.field(Species::A), live.field(Species::B))
}

fn advance_serial(guard: StepGuard<'_>, params: &ReactionParams) {
    let StepGuard { dims, live, next } = guard;
    let width = dims.width() as usize;
    let (live_a, live_b) = split(live);
    let (next_a, next_b) = next.fields_mut();
    let rows = interior_rows(dims);

    for (k, (row_a, row_b)) in next_a[rows.clone()]
        .chunks_mut(width)
        .zip(next_b[rows].chunks_mut(width))
        .enumerate()
    {
        update_row(live_a, live_b, width, k + 1, row_a, row_b, params);
    }
}

fn advance_parallel(guard: StepGuard<'_>, params: &ReactionParams) {
    let StepGuard { dims, live, next } = guard;
    let width = dims.width() as usize;
    let (live_a, live_b) = split(live);
    let (next_a, next_b) = next.fields_mut();
    let rows = interior_rows(dims);

    next_a[rows.clone()]
        .par_chunks_mut(width)
        .zip(next_b[rows].par_chunks_mut(width))
        .enumerate()
        .for_each(|(k, (row_a, row_b))| {
            update_row(live_a, live_b, width, k + 1, row_a, row_b, params);
        });
}
