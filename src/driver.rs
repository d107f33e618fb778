//! Frame clock
//!
//! Turns display-refresh timestamps (milliseconds, as handed out by
//! `requestAnimationFrame` or a native frame loop) into tick deltas.

use crate::consts::MAX_FRAME_DT;

/// Tracks the previous frame timestamp
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT)
    }

    /// Clock with a custom cap on a single delta (seconds)
    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Delta in seconds since the previous frame.
    ///
    /// The first frame after construction or [`reset`](Self::reset) only primes
    /// the clock and yields `None`. Deltas are clamped to `[0, max_dt]` so a
    /// backgrounded tab or a clock going backwards can't produce a huge or
    /// negative step.
    pub fn frame(&mut self, now_ms: f64) -> Option<f32> {
        let last = self.last_ms.replace(now_ms)?;
        let dt = ((now_ms - last) / 1000.0) as f32;
        Some(dt.clamp(0.0, self.max_dt))
    }

    /// Forget the previous timestamp (call when a run starts)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
