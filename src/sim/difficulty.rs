//! Difficulty levels and their tuning constants

use serde::{Deserialize, Serialize};

/// Selectable difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" | "normal" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "extreme" => Some(Difficulty::Extreme),
            _ => None,
        }
    }

    /// Reference tuning for this difficulty
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                base_speed: 4.0,
                speed_increment: 0.002,
                max_speed: 10.0,
                spawn_interval: 2500.0,
                min_spawn_interval: 1500.0,
                jump_force: -14.0,
                gravity: 0.6,
            },
            Difficulty::Medium => DifficultyProfile {
                base_speed: 6.0,
                speed_increment: 0.003,
                max_speed: 14.0,
                spawn_interval: 2000.0,
                min_spawn_interval: 1200.0,
                jump_force: -15.0,
                gravity: 0.7,
            },
            Difficulty::Hard => DifficultyProfile {
                base_speed: 8.0,
                speed_increment: 0.004,
                max_speed: 18.0,
                spawn_interval: 1500.0,
                min_spawn_interval: 900.0,
                jump_force: -16.0,
                gravity: 0.8,
            },
            Difficulty::Extreme => DifficultyProfile {
                base_speed: 10.0,
                speed_increment: 0.005,
                max_speed: 24.0,
                spawn_interval: 1200.0,
                min_spawn_interval: 600.0,
                jump_force: -18.0,
                gravity: 0.9,
            },
        }
    }
}

/// Immutable tuning record for one difficulty.
///
/// Speeds are pixels per tick, intervals are milliseconds, and `gravity` is a
/// per-tick acceleration. Physics advances once per tick regardless of the
/// frame delta, so feel is tied to the ~60 Hz cadence these numbers target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// World speed at run start
    pub base_speed: f32,
    /// Speed added every tick
    pub speed_increment: f32,
    /// Speed ceiling
    pub max_speed: f32,
    /// Spawn interval at base speed (ms)
    pub spawn_interval: f32,
    /// Spawn interval floor (ms)
    pub min_spawn_interval: f32,
    /// Upward impulse applied on jump (negative = up)
    pub jump_force: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::default().profile()
    }
}

impl DifficultyProfile {
    /// Spawn interval at the given world speed; shrinks 100 ms per unit of
    /// speed above base, never below `min_spawn_interval`.
    pub fn effective_spawn_interval(&self, speed: f32) -> f32 {
        let interval = self.spawn_interval - (speed - self.base_speed) * 100.0;
        interval.max(self.min_spawn_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_profiles_get_harder() {
        for pair in Difficulty::ALL.windows(2) {
            let (a, b) = (pair[0].profile(), pair[1].profile());
            assert!(b.base_speed > a.base_speed);
            assert!(b.speed_increment > a.speed_increment);
            assert!(b.max_speed > a.max_speed);
            assert!(b.spawn_interval < a.spawn_interval);
            assert!(b.min_spawn_interval < a.min_spawn_interval);
            assert!(b.jump_force < a.jump_force);
            assert!(b.gravity > a.gravity);
        }
    }

    #[test]
    fn test_profile_bounds() {
        for d in Difficulty::ALL {
            let p = d.profile();
            assert!(p.min_spawn_interval <= p.spawn_interval);
            assert!(p.base_speed <= p.max_speed);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("EXTREME"), Some(Difficulty::Extreme));
        assert_eq!(Difficulty::from_str("normal"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
    }

    #[test]
    fn test_spawn_interval_at_base_speed() {
        let p = Difficulty::Medium.profile();
        assert_eq!(p.effective_spawn_interval(6.0), 2000.0);
        assert_eq!(p.effective_spawn_interval(10.0), 1600.0);
        assert_eq!(p.effective_spawn_interval(14.0), 1200.0);
    }

    proptest! {
        #[test]
        fn spawn_interval_never_below_floor(speed in -100.0f32..1000.0, idx in 0usize..4) {
            let p = Difficulty::ALL[idx].profile();
            prop_assert!(p.effective_spawn_interval(speed) >= p.min_spawn_interval);
        }
    }
}
