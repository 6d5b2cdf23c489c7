//! Data-driven game balance
//!
//! Defaults reproduce the shipped difficulty table. A JSON document can
//! override any subset of fields; everything missing falls back to default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Difficulty, DifficultyProfile, ObstacleMotion, ScorePolicy};

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{difficulty:?}: {reason}")]
    Profile {
        difficulty: Difficulty,
        reason: &'static str,
    },
    #[error("{0}")]
    World(&'static str),
}

/// Per-difficulty profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileTable {
    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
    pub extreme: DifficultyProfile,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            easy: Difficulty::Easy.profile(),
            medium: Difficulty::Medium.profile(),
            hard: Difficulty::Hard.profile(),
            extreme: Difficulty::Extreme.profile(),
        }
    }
}

impl ProfileTable {
    pub fn get(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
            Difficulty::Extreme => &self.extreme,
        }
    }

    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
            Difficulty::Extreme => &mut self.extreme,
        }
    }
}

/// Complete balance configuration for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub profiles: ProfileTable,
    /// Hitbox shrink on every edge (px)
    pub hitbox_padding: f32,
    /// Milliseconds per score point
    pub score_interval_ms: f32,
    pub score_policy: ScorePolicy,
    pub obstacle_motion: ObstacleMotion,
    /// Score per level
    pub level_score_step: u64,
    pub max_obstacles: usize,
    /// Cap on a single step, in target frames
    pub max_step_frames: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            profiles: ProfileTable::default(),
            hitbox_padding: HITBOX_PADDING,
            score_interval_ms: SCORE_INTERVAL_MS,
            score_policy: ScorePolicy::default(),
            obstacle_motion: ObstacleMotion::default(),
            level_score_step: LEVEL_SCORE_STEP,
            max_obstacles: MAX_OBSTACLES,
            max_step_frames: MAX_STEP_FRAMES,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        self.profiles.get(difficulty)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        for difficulty in Difficulty::ALL {
            validate_profile(self.profile(difficulty))
                .map_err(|reason| TuningError::Profile { difficulty, reason })?;
        }
        if !(self.hitbox_padding.is_finite() && self.hitbox_padding >= 0.0) {
            return Err(TuningError::World("hitbox_padding must be finite and >= 0"));
        }
        if !(self.score_interval_ms.is_finite() && self.score_interval_ms > 0.0) {
            return Err(TuningError::World("score_interval_ms must be > 0"));
        }
        if self.level_score_step == 0 {
            return Err(TuningError::World("level_score_step must be > 0"));
        }
        if self.max_obstacles == 0 {
            return Err(TuningError::World("max_obstacles must be > 0"));
        }
        if !(self.max_step_frames.is_finite() && self.max_step_frames >= 1.0) {
            return Err(TuningError::World("max_step_frames must be >= 1"));
        }
        Ok(())
    }
}

fn validate_profile(p: &DifficultyProfile) -> Result<(), &'static str> {
    let values = [
        p.base_speed,
        p.speed_increment,
        p.max_speed,
        p.spawn_interval,
        p.min_spawn_interval,
        p.jump_force,
        p.gravity,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err("values must be finite");
    }
    if p.base_speed > p.max_speed {
        return Err("base_speed exceeds max_speed");
    }
    if p.min_spawn_interval > p.spawn_interval {
        return Err("min_spawn_interval exceeds spawn_interval");
    }
    if p.min_spawn_interval <= 0.0 {
        return Err("min_spawn_interval must be > 0");
    }
    if p.speed_increment < 0.0 {
        return Err("speed_increment must be >= 0");
    }
    if p.jump_force >= 0.0 {
        return Err("jump_force must be negative (upward)");
    }
    if p.gravity <= 0.0 {
        return Err("gravity must be > 0");
    }
    Ok(())
}
