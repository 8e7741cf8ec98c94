//! Headless frame driver.
//!
//! A [`Session`] is what an interactive front end talks to. Slider moves
//! become [`set_feed`](Session::set_feed) / [`set_kill`](Session::set_kill),
//! pointer presses and drags become [`inject`](Session::inject), and the
//! display loop calls [`frame`](Session::frame) once per refresh.
//!
//! # Frame phases
//!
//! Each frame runs three phases strictly in order, all under `&mut self`:
//!
//! 1. **Inject**: drain the pending brush queue into the live generation.
//! 2. **Step**: run `iterations_per_frame` stepper iterations, unless paused.
//! 3. **Render**: write the `B` field into the caller's pixel buffer.
//!
//! The pixel buffer is checked before any phase runs, so a bad buffer
//! leaves the simulation untouched.

use std::time::Instant;

use log::{debug, info, warn};
use smallvec::SmallVec;
use turing_core::{ConfigError, Preset, ReactionParams, RenderError, SeedShape};

use crate::config::SimulationConfig;
use crate::metrics::FrameMetrics;
use crate::simulation::ReactionDiffusion;

/// Pointer positions waiting for the next frame. A drag rarely produces
/// more than a handful between two frames.
type InjectionQueue = SmallVec<[(i32, i32); 8]>;

/// A running simulation with live parameters, pause state and a brush.
#[derive(Debug)]
pub struct Session {
    sim: ReactionDiffusion,
    params: ReactionParams,
    iterations_per_frame: u32,
    initial_seed: Option<SeedShape>,
    brush: SeedShape,
    paused: bool,
    pending: InjectionQueue,
    frames: u64,
}

impl Session {
    /// Validate `config`, allocate the grid and apply the initial seed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sim = ReactionDiffusion::with_execution(config.width, config.height, config.execution)?;
        let mut session = Self {
            sim,
            params: config.params,
            iterations_per_frame: config.iterations_per_frame,
            initial_seed: config.initial_seed,
            brush: config.brush(),
            paused: false,
            pending: InjectionQueue::new(),
            frames: 0,
        };
        session.apply_initial_seed();
        session.check_band(None);
        info!(
            "session started: {}x{}, {} iteration(s) per frame, {:?}",
            config.width, config.height, config.iterations_per_frame, config.execution
        );
        Ok(session)
    }

    fn apply_initial_seed(&mut self) {
        match self.initial_seed {
            None => self.sim.initialize(),
            Some(shape) => {
                self.sim.grid_mut().reset();
                let (cx, cy) = self.sim.dims().center();
                let seeded = self.sim.seed(shape, cx as i32, cy as i32);
                debug_assert!(seeded.is_ok(), "initial seed is validated in `new`");
                if let Err(err) = seeded {
                    warn!("initial seed skipped: {err}");
                }
            }
        }
    }

    // ── Parameters ──────────────────────────────────────────────

    /// Current reaction parameters.
    pub fn params(&self) -> ReactionParams {
        self.params
    }

    /// Replace all reaction parameters; takes effect on the next step.
    pub fn set_params(&mut self, params: ReactionParams) {
        let previous = self.params;
        self.params = params;
        self.check_band(Some(previous));
    }

    /// Slider update for the feed rate.
    pub fn set_feed(&mut self, feed: f32) {
        self.set_params(self.params.with_feed(feed));
    }

    /// Slider update for the kill rate.
    pub fn set_kill(&mut self, kill: f32) {
        self.set_params(self.params.with_kill(kill));
    }

    /// Switch to a named feed/kill pair, keeping the diffusion rates.
    pub fn apply_preset(&mut self, preset: Preset) {
        let (feed, kill) = preset.feed_kill();
        debug!("applying preset {preset}");
        self.set_params(self.params.with_feed(feed).with_kill(kill));
    }

    /// Warn when the parameters leave the stable band, once per excursion.
    fn check_band(&self, previous: Option<ReactionParams>) {
        let was_stable = previous.is_none_or(|p| p.is_in_stable_band());
        let stable = self.params.is_in_stable_band();
        if was_stable && !stable {
            warn!(
                "feed {} / kill {} outside the stable band; patterns may die out or blow up",
                self.params.feed, self.params.kill
            );
        } else if !was_stable && stable {
            debug!(
                "feed {} / kill {} back inside the stable band",
                self.params.feed, self.params.kill
            );
        }
    }

    // ── Run state ───────────────────────────────────────────────

    /// Stop stepping. Injections and rendering still run.
    pub fn pause(&mut self) {
        if !self.paused {
            debug!("paused at generation {}", self.sim.generation());
        }
        self.paused = true;
    }

    /// Resume stepping.
    pub fn resume(&mut self) {
        if self.paused {
            debug!("resumed at generation {}", self.sim.generation());
        }
        self.paused = false;
    }

    /// Flip between paused and running. Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    /// Whether stepping is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Back to the initial seed. Pending injections are dropped; parameters
    /// and pause state are kept.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.apply_initial_seed();
        debug!("session reset after {} frame(s)", self.frames);
    }

    // ── Frame loop ──────────────────────────────────────────────

    /// Queue a brush stamp at `(x, y)` for the next frame. Positions off
    /// the grid are clipped when applied.
    pub fn inject(&mut self, x: i32, y: i32) {
        self.pending.push((x, y));
    }

    /// Number of injections waiting for the next frame.
    pub fn pending_injections(&self) -> usize {
        self.pending.len()
    }

    /// Run the inject and step phases without rendering.
    pub fn update(&mut self) -> FrameMetrics {
        self.frames += 1;
        let injections = self.pending.len();
        let mut cells_seeded = 0;
        for (x, y) in self.pending.drain(..) {
            let stamped = self.sim.seed(self.brush, x, y);
            debug_assert!(stamped.is_ok(), "brush is validated in `new`");
            match stamped {
                Ok(cells) => cells_seeded += cells,
                Err(err) => warn!("injection at ({x}, {y}) skipped: {err}"),
            }
        }
        let step = if self.paused {
            None
        } else {
            Some(self.sim.step(&self.params, self.iterations_per_frame))
        };
        FrameMetrics {
            frame: self.frames,
            injections,
            cells_seeded,
            step,
            render_us: 0,
        }
    }

    /// Run one full frame: inject, step (unless paused), render into
    /// `pixels` at `stride` bytes per row.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the buffer cannot hold the image. The
    /// check happens first, so on error no phase has run and the pending
    /// injections are still queued.
    pub fn frame(&mut self, pixels: &mut [u8], stride: usize) -> Result<FrameMetrics, RenderError> {
        turing_render::check_target(self.sim.dims(), pixels.len(), stride)?;
        let mut metrics = self.update();
        let start = Instant::now();
        self.sim.render(pixels, stride)?;
        metrics.render_us = start.elapsed().as_micros() as u64;
        Ok(metrics)
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Frames run so far (both `frame` and `update` count).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Stepper iterations per frame.
    pub fn iterations_per_frame(&self) -> u32 {
        self.iterations_per_frame
    }

    /// The brush stamped by [`inject`](Self::inject).
    pub fn brush(&self) -> SeedShape {
        self.brush
    }

    /// The simulation being driven.
    pub fn simulation(&self) -> &ReactionDiffusion {
        &self.sim
    }

    /// Mutable access to the simulation, for seeding outside the frame loop.
    pub fn simulation_mut(&mut self) -> &mut ReactionDiffusion {
        &mut self.sim
    }
}
