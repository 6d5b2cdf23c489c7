//! Dragon Runner - A side-scrolling reflex runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `tuning`: Data-driven game balance
//! - `persistence`: Injected key/value storage for records
//! - `platform`: Input mapping, frame metering, native/web storage backends

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod stats;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::Settings;
pub use stats::Stats;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Visible field dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;
    /// Height of the ground band at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 50.0;
    /// Y of the ground line (top of the ground band)
    pub const GROUND_LINE: f32 = CANVAS_HEIGHT - GROUND_HEIGHT;

    /// Runner defaults - x never changes
    pub const RUNNER_X: f32 = 100.0;
    pub const RUNNER_WIDTH: f32 = 80.0;
    pub const RUNNER_HEIGHT: f32 = 90.0;
    /// Runner y when standing on the ground line
    pub const RUNNER_GROUND_Y: f32 = GROUND_LINE - RUNNER_HEIGHT;
    pub const RUNNER_FRAMES: u8 = 4;
    pub const RUNNER_FRAME_MS: f32 = 100.0;

    /// Obstacle (dragon) defaults
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const OBSTACLE_HEIGHT: f32 = 60.0;
    /// Spawn x, just past the right edge
    pub const OBSTACLE_SPAWN_X: f32 = CANVAS_WIDTH + 50.0;
    /// Max upward jitter of a freshly spawned obstacle
    pub const OBSTACLE_Y_JITTER: f32 = 20.0;
    pub const OBSTACLE_FRAMES: u8 = 2;
    pub const OBSTACLE_FRAME_MS: f32 = 150.0;

    /// Inward shrink applied to both hitboxes
    pub const HITBOX_PADDING: f32 = 15.0;
    /// One point per this many milliseconds survived
    pub const SCORE_INTERVAL_MS: f32 = 100.0;
    /// Score needed per level
    pub const LEVEL_SCORE_STEP: u64 = 1000;
    /// Background parallax factor relative to world speed
    pub const BACKGROUND_PARALLAX: f32 = 0.5;

    /// Frame cadence the per-tick physics constants were tuned for
    pub const TARGET_FRAME_MS: f32 = 1000.0 / 60.0;
    /// A single step may cover at most this many target frames
    pub const MAX_STEP_FRAMES: f32 = 4.0;
    /// Upper bound on live obstacles
    pub const MAX_OBSTACLES: usize = 32;
}
