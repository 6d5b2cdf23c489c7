//! Frame timestamps to bounded simulation steps

use crate::consts::{MAX_STEP_FRAMES, TARGET_FRAME_MS};

/// Replace negative or non-finite deltas with zero
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Turns wall-clock frame timestamps (ms) into per-tick deltas.
///
/// The first call after construction or [`SimulationClock::reset`] only sets
/// the baseline and yields zero. Later deltas are capped so a backgrounded tab
/// can't tunnel obstacles through the runner in one step.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    last_timestamp: Option<f64>,
    max_step_ms: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(MAX_STEP_FRAMES)
    }
}

impl SimulationClock {
    /// Clock whose steps cover at most `max_step_frames` target frames
    pub fn new(max_step_frames: f32) -> Self {
        Self {
            last_timestamp: None,
            max_step_ms: TARGET_FRAME_MS * sanitize_dt(max_step_frames).max(1.0),
        }
    }

    /// Largest delta a single call can return
    pub fn max_step_ms(&self) -> f32 {
        self.max_step_ms
    }

    /// Forget the baseline; the next `advance` yields zero
    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }

    /// Feed a frame timestamp, get the delta since the previous one
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let Some(last) = self.last_timestamp.replace(timestamp_ms) else {
            return 0.0;
        };
        sanitize_dt((timestamp_ms - last) as f32).min(self.max_step_ms)
    }
}
