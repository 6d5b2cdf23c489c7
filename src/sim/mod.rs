//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, per-tick physics
//! - Seeded RNG only, and only for cosmetic spawn jitter
//! - No rendering, audio or storage dependencies

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod progression;
pub mod runner;
pub mod session;
pub mod state;
pub mod tick;

pub use clock::{SimulationClock, sanitize_dt};
pub use collision::{Rect, check_collision};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use obstacle::{Obstacle, ObstacleField, ObstacleMotion};
pub use progression::{ProgressStep, ProgressionTracker, ScorePolicy};
pub use runner::{RunnerBody, RunnerStep};
pub use session::{Intent, SessionController};
pub use state::{GameEvent, GamePhase, GameState, ObstacleView, RunOutcome, RunnerView, Snapshot};
pub use tick::tick;
