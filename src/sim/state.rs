//! Session state and the read-only views handed to collaborators

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::{Difficulty, DifficultyProfile};
use super::obstacle::ObstacleField;
use super::progression::ProgressionTracker;
use super::runner::RunnerBody;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Menu; nothing simulates
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Frozen mid-run
    Paused,
    /// Run ended by a collision; state frozen until restart
    Ended,
}

/// Final result of a run, reported once when it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub final_score: u64,
    pub difficulty: Difficulty,
    pub obstacles_cleared: u32,
    pub level: u32,
    pub ticks: u64,
}

/// Things collaborators (audio, HUD, records) may react to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { difficulty: Difficulty },
    Jumped,
    Landed,
    ObstacleSpawned { id: u32 },
    ObstacleCleared { id: u32 },
    LevelUp { level: u32 },
    Paused,
    Resumed,
    GameOver(RunOutcome),
}

/// Everything mutable about a session. Owned by the session controller.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub profile: DifficultyProfile,
    pub runner: RunnerBody,
    pub field: ObstacleField,
    pub progress: ProgressionTracker,
    /// Parallax scroll offset, in (-CANVAS_WIDTH, 0]
    pub background_x: f32,
    /// Simulation ticks this run
    pub time_ticks: u64,
    pub hitbox_padding: f32,
    /// Base seed; each run derives its own from this and the run count
    pub seed: u64,
    pub runs: u64,
}

impl GameState {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let difficulty = Difficulty::default();
        let profile = *tuning.profile(difficulty);
        let mut progress = ProgressionTracker::new(
            tuning.score_interval_ms,
            tuning.level_score_step,
            tuning.score_policy,
        );
        progress.reset(&profile);
        Self {
            phase: GamePhase::Idle,
            difficulty,
            profile,
            runner: RunnerBody::default(),
            field: ObstacleField::new(seed, tuning.obstacle_motion, tuning.max_obstacles),
            progress,
            background_x: 0.0,
            time_ticks: 0,
            hitbox_padding: tuning.hitbox_padding,
            seed,
            runs: 0,
        }
    }

    /// Fresh run on `profile`; leaves the phase alone
    pub fn reset_run(&mut self, difficulty: Difficulty, profile: DifficultyProfile) {
        self.difficulty = difficulty;
        self.profile = profile;
        self.runs += 1;
        let run_seed = self.seed.wrapping_add(self.runs.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.runner = RunnerBody::default();
        self.field.reset(run_seed);
        self.progress.reset(&profile);
        self.background_x = 0.0;
        self.time_ticks = 0;
    }

    /// Scroll the background by half the world speed, wrapping every screen
    pub fn scroll_background(&mut self) {
        self.background_x -= self.progress.speed * BACKGROUND_PARALLAX;
        if self.background_x <= -CANVAS_WIDTH {
            self.background_x = 0.0;
        }
    }

    pub fn outcome(&self) -> RunOutcome {
        RunOutcome {
            final_score: self.progress.score,
            difficulty: self.difficulty,
            obstacles_cleared: self.field.cleared,
            level: self.progress.level,
            ticks: self.time_ticks,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            score: self.progress.score,
            level: self.progress.level,
            speed: self.progress.speed,
            background_x: self.background_x,
            runner: RunnerView {
                rect: self.runner.rect(),
                airborne: self.runner.airborne,
                frame: self.runner.frame_index,
            },
            obstacles: self
                .field
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    rect: o.rect(),
                    frame: o.frame_index,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunnerView {
    pub rect: Rect,
    pub airborne: bool,
    pub frame: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub rect: Rect,
    pub frame: u8,
}

/// Read-only per-frame view for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub score: u64,
    pub level: u32,
    pub speed: f32,
    pub background_x: f32,
    pub runner: RunnerView,
    pub obstacles: Vec<ObstacleView>,
}

impl Snapshot {
    /// Runner's top-left corner
    pub fn runner_pos(&self) -> Vec2 {
        self.runner.rect.pos
    }
}
