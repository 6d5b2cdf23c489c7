//! Speed ramp, score accrual, and level derivation

use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyProfile;
use crate::consts::{LEVEL_SCORE_STEP, SCORE_INTERVAL_MS};

/// What happens to the score timer's overshoot when a point is awarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePolicy {
    /// Keep the overshoot so points track elapsed time at any frame rate
    Carry,
    /// Reset to zero after each point (at most one point per tick)
    #[default]
    Drop,
}

/// Changes reported by one progression update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStep {
    pub points: u64,
    /// New level, if it went up
    pub level_up: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ProgressionTracker {
    pub speed: f32,
    pub score: u64,
    pub level: u32,
    pub score_timer: f32,
    score_interval_ms: f32,
    level_step: u64,
    policy: ScorePolicy,
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self::new(SCORE_INTERVAL_MS, LEVEL_SCORE_STEP, ScorePolicy::default())
    }
}

impl ProgressionTracker {
    pub fn new(score_interval_ms: f32, level_step: u64, policy: ScorePolicy) -> Self {
        Self {
            speed: 0.0,
            score: 0,
            level: 1,
            score_timer: 0.0,
            score_interval_ms,
            level_step: level_step.max(1),
            policy,
        }
    }

    /// Back to run start for the given profile
    pub fn reset(&mut self, profile: &DifficultyProfile) {
        self.speed = profile.base_speed;
        self.score = 0;
        self.level = 1;
        self.score_timer = 0.0;
    }

    /// Level implied by a score
    pub fn level_for(&self, score: u64) -> u32 {
        (score / self.level_step) as u32 + 1
    }

    /// Ramp speed by one tick's increment, capped at the profile maximum
    pub fn ramp_speed(&mut self, profile: &DifficultyProfile) {
        self.speed = (self.speed + profile.speed_increment).min(profile.max_speed);
    }

    /// Accrue real-time score and re-derive the level
    pub fn accrue(&mut self, dt: f32) -> ProgressStep {
        self.score_timer += dt;

        let points = match self.policy {
            ScorePolicy::Carry => {
                let whole = (self.score_timer / self.score_interval_ms).floor();
                self.score_timer -= whole * self.score_interval_ms;
                whole as u64
            }
            ScorePolicy::Drop => {
                if self.score_timer > self.score_interval_ms {
                    self.score_timer = 0.0;
                    1
                } else {
                    0
                }
            }
        };
        self.score += points;

        let level = self.level_for(self.score);
        let level_up = (level > self.level).then_some(level);
        self.level = level;
        ProgressStep { points, level_up }
    }

    /// One full tick: speed ramp then score
    pub fn update(&mut self, dt: f32, profile: &DifficultyProfile) -> ProgressStep {
        self.ramp_speed(profile);
        self.accrue(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Difficulty;
    use proptest::prelude::*;

    fn tracker(policy: ScorePolicy, profile: &DifficultyProfile) -> ProgressionTracker {
        let mut t = ProgressionTracker::new(SCORE_INTERVAL_MS, LEVEL_SCORE_STEP, policy);
        t.reset(profile);
        t
    }

    #[test]
    fn test_five_hundred_ticks_medium() {
        let profile = Difficulty::Medium.profile();
        let mut t = tracker(ScorePolicy::Carry, &profile);
        assert_eq!(t.speed, 6.0);
        for _ in 0..500 {
            t.update(16.7, &profile);
        }
        assert!((t.speed - 7.5).abs() < 1e-3, "speed {}", t.speed);
        assert!((82..=84).contains(&t.score), "score {}", t.score);
    }

    #[test]
    fn test_drop_policy_loses_remainder() {
        let profile = Difficulty::Medium.profile();
        let mut drop = tracker(ScorePolicy::Drop, &profile);
        let mut carry = tracker(ScorePolicy::Carry, &profile);
        for _ in 0..500 {
            drop.update(60.0, &profile);
            carry.update(60.0, &profile);
        }
        // Slow frames: drop awards one point per two ticks, carry keeps up
        assert_eq!(drop.score, 250);
        assert_eq!(carry.score, 300);
    }

    #[test]
    fn test_speed_caps_at_max() {
        let profile = Difficulty::Easy.profile();
        let mut t = tracker(ScorePolicy::Carry, &profile);
        for _ in 0..10_000 {
            t.ramp_speed(&profile);
        }
        assert_eq!(t.speed, profile.max_speed);
    }

    #[test]
    fn test_level_up_reported_once() {
        let profile = Difficulty::Medium.profile();
        let mut t = tracker(ScorePolicy::Carry, &profile);
        let step = t.accrue(99_900.0);
        assert_eq!(step.points, 999);
        assert_eq!(step.level_up, None);
        let step = t.accrue(100.0);
        assert_eq!(step.level_up, Some(2));
        assert_eq!(t.accrue(100.0).level_up, None);
        assert_eq!(t.level, 2);
    }

    #[test]
    fn test_reset() {
        let profile = Difficulty::Hard.profile();
        let mut t = tracker(ScorePolicy::Carry, &profile);
        t.update(5000.0, &profile);
        t.reset(&profile);
        assert_eq!(t.score, 0);
        assert_eq!(t.level, 1);
        assert_eq!(t.speed, profile.base_speed);
        assert_eq!(t.score_timer, 0.0);
    }

    proptest! {
        #[test]
        fn speed_monotonic_and_bounded(idx in 0usize..4, ticks in 1usize..5000) {
            let profile = Difficulty::ALL[idx].profile();
            let mut t = tracker(ScorePolicy::Carry, &profile);
            let mut prev = t.speed;
            for _ in 0..ticks {
                t.ramp_speed(&profile);
                prop_assert!(t.speed >= prev);
                prop_assert!(t.speed <= profile.max_speed);
                prev = t.speed;
            }
        }

        #[test]
        fn carry_tracks_elapsed_time(dts in prop::collection::vec(0.0f32..70.0, 1..300)) {
            let profile = Difficulty::Medium.profile();
            let mut t = tracker(ScorePolicy::Carry, &profile);
            let total: f32 = dts.iter().sum();
            for dt in dts {
                t.accrue(dt);
            }
            let expected = (total / SCORE_INTERVAL_MS).floor() as i64;
            prop_assert!((t.score as i64 - expected).abs() <= 1);
        }
    }
}
