//! # Game Loop
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. BEGIN FRAME                                                      │
//! │    └─ Measure delta time, clamp it to `frame.max_delta`             │
//! │                                                                     │
//! │ 2. UPDATE                                                           │
//! │    ├─ Scroll tiles                                                  │
//! │    ├─ Move and animate the player                                   │
//! │    └─ Apply queued component patches                                │
//! │                                                                     │
//! │ 3. COLLECT DRAW CALLS                                               │
//! │                                                                     │
//! │ 4. END FRAME                                                        │
//! │    └─ Record timing, announce `FrameCompleted`                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::{Duration, Instant};

use galabingus_shared::MAX_FRAME_DELTA;
use tracing::warn;

use crate::config::FrameConfig;
use crate::events::{EventSender, GameEvent};
use crate::scene::{DrawCall, Scene};

/// Frame timing statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Total frame time in microseconds.
    pub total_us: u64,
    /// Update time in microseconds.
    pub update_us: u64,
    /// Draw call collection time in microseconds.
    pub draw_us: u64,
    /// Frame number.
    pub frame: u64,
    /// Draw calls produced.
    pub draw_calls: u32,
}

/// Output of one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    /// Timing of the frame.
    pub stats: FrameStats,
    /// What to draw.
    pub draw_calls: Vec<DrawCall>,
}

/// Drives a [`Scene`] frame by frame.
pub struct GameLoop {
    /// The level being played.
    scene: Scene,
    /// Where `FrameCompleted` goes.
    events: EventSender,
    /// Pacing configuration.
    config: FrameConfig,
    /// Largest delta a frame observes, in seconds.
    max_delta: f64,
    /// Frame budget at the target rate.
    budget: Duration,
    /// Frame counter.
    frame_count: u64,
    /// Last frame start time.
    last_frame_time: Instant,
    /// Accumulated frame statistics.
    stats_accumulator: FrameStatsAccumulator,
}

impl GameLoop {
    /// Creates a game loop over `scene`.
    ///
    /// # Arguments
    ///
    /// * `scene` - The level to run
    /// * `config` - Frame pacing
    /// * `events` - Receives one `FrameCompleted` per frame
    ///
    /// A `max_delta` that is not a positive number falls back to
    /// [`MAX_FRAME_DELTA`].
    #[must_use]
    pub fn new(scene: Scene, config: FrameConfig, events: EventSender) -> Self {
        let budget = Duration::from_secs_f64(1.0 / f64::from(config.target_fps.max(1)));
        let max_delta = if config.max_delta.is_finite() && config.max_delta > 0.0 {
            f64::from(config.max_delta)
        } else {
            warn!(max_delta = config.max_delta, "unusable max_delta, using default");
            f64::from(MAX_FRAME_DELTA)
        };
        Self {
            scene,
            events,
            config,
            max_delta,
            budget,
            frame_count: 0,
            last_frame_time: Instant::now(),
            stats_accumulator: FrameStatsAccumulator::new(budget),
        }
    }

    /// Runs one frame using wall-clock delta time, clamped to `max_delta`.
    pub fn tick(&mut self) -> FrameOutput {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f64();
        self.last_frame_time = now;
        self.step(delta)
    }

    /// Runs one frame with an explicit delta time, clamped to `max_delta`.
    pub fn step(&mut self, delta: f64) -> FrameOutput {
        let delta = if delta.is_nan() {
            0.0
        } else {
            delta.max(0.0).min(self.max_delta)
        };
        let start = Instant::now();

        self.scene.update(delta);
        let updated = Instant::now();

        let draw_calls = self.scene.draw_calls();
        let finished = Instant::now();

        let stats = FrameStats {
            total_us: micros(finished - start),
            update_us: micros(updated - start),
            draw_us: micros(finished - updated),
            frame: self.frame_count,
            draw_calls: draw_calls.len() as u32,
        };
        self.end_frame(stats);

        FrameOutput { stats, draw_calls }
    }

    /// Records timing and prepares for the next frame.
    fn end_frame(&mut self, stats: FrameStats) {
        self.frame_count += 1;
        self.stats_accumulator.record(stats);

        if self.config.enable_timing_logs && stats.total_us > micros(self.budget) {
            warn!(
                frame = stats.frame,
                total_us = stats.total_us,
                budget_us = micros(self.budget),
                "frame exceeded budget"
            );
        }

        self.events.send(GameEvent::FrameCompleted {
            frame: stats.frame,
            draw_calls: stats.draw_calls as usize,
        });
    }

    /// Returns the current frame count.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the scene for steering and patching between frames.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Returns the accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats_accumulator
    }
}

fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Frame budget in microseconds.
    pub budget_us: u64,
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of total frame times.
    pub total_us_sum: u64,
    /// Sum of update times.
    pub update_us_sum: u64,
    /// Sum of draw collection times.
    pub draw_us_sum: u64,
    /// Min frame time.
    pub min_frame_us: u64,
    /// Max frame time.
    pub max_frame_us: u64,
    /// Frames that exceeded budget.
    pub frames_over_budget: u64,
}

impl FrameStatsAccumulator {
    /// Creates a new accumulator for the given frame budget.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            budget_us: micros(budget),
            frames_recorded: 0,
            total_us_sum: 0,
            update_us_sum: 0,
            draw_us_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
        }
    }

    /// Records a frame's statistics.
    pub fn record(&mut self, stats: FrameStats) {
        self.frames_recorded += 1;
        self.total_us_sum += stats.total_us;
        self.update_us_sum += stats.update_us;
        self.draw_us_sum += stats.draw_us;
        self.min_frame_us = self.min_frame_us.min(stats.total_us);
        self.max_frame_us = self.max_frame_us.max(stats.total_us);

        if stats.total_us > self.budget_us {
            self.frames_over_budget += 1;
        }
    }

    /// Returns average frame time in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Returns the fraction of frames over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }

    /// Prints a summary of the statistics.
    pub fn print_summary(&self) {
        println!("┌─ FRAMES ─────────────────────────────────────────────────────────┐");
        println!("│ Frames Recorded:    {}", self.frames_recorded);
        println!("│ Average Frame:      {:.3} ms", self.avg_frame_ms());
        if self.frames_recorded > 0 {
            println!("│ Min Frame:          {:.3} ms", self.min_frame_us as f64 / 1000.0);
            println!("│ Max Frame:          {:.3} ms", self.max_frame_us as f64 / 1000.0);
        }
        println!(
            "│ Over Budget:        {} frames ({:.1}%)",
            self.frames_over_budget,
            self.over_budget_ratio() * 100.0
        );
        println!("└──────────────────────────────────────────────────────────────────┘");
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(galabingus_shared::TARGET_FPS)))
    }
}
