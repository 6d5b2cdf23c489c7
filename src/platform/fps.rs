//! Rolling frame-rate average for the HUD

use std::collections::VecDeque;

/// Samples kept for the average
pub const FPS_WINDOW: usize = 30;

#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    samples: VecDeque<f32>,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(FPS_WINDOW),
        }
    }

    /// Record one frame delta (ms). Zero or invalid deltas are skipped.
    pub fn record(&mut self, dt_ms: f32) {
        if !(dt_ms.is_finite() && dt_ms > 0.0) {
            return;
        }
        if self.samples.len() == FPS_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(1000.0 / dt_ms);
    }

    /// Average over the window, rounded; 0 before any samples
    pub fn fps(&self) -> u32 {
        if self.samples.is_empty() {
            return 0;
        }
        let sum: f32 = self.samples.iter().sum();
        (sum / self.samples.len() as f32).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_rate() {
        let mut meter = FpsMeter::new();
        assert_eq!(meter.fps(), 0);
        for _ in 0..100 {
            meter.record(1000.0 / 60.0);
        }
        assert_eq!(meter.fps(), 60);
    }

    #[test]
    fn test_window_forgets_old_frames() {
        let mut meter = FpsMeter::new();
        for _ in 0..FPS_WINDOW {
            meter.record(100.0);
        }
        for _ in 0..FPS_WINDOW {
            meter.record(20.0);
        }
        assert_eq!(meter.fps(), 50);
        meter.record(0.0);
        meter.record(f32::NAN);
        assert_eq!(meter.fps(), 50);
    }
}
