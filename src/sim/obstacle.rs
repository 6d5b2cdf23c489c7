//! Obstacle population: spawn scheduling, advancement, pruning

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::DifficultyProfile;
use crate::consts::*;

/// How far obstacles move each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleMotion {
    /// Everything scrolls at the current world speed
    #[default]
    Global,
    /// Each obstacle keeps the speed it spawned with
    Captured,
}

/// A dragon flying toward the runner
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Unique per spawn, never reused within a field
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// World speed at the moment of spawn
    pub speed: f32,
    pub frame_index: u8,
    frame_timer: f32,
}

impl Obstacle {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Fully past the left edge
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }

    fn animate(&mut self, dt: f32) {
        self.frame_timer += dt;
        if self.frame_timer > OBSTACLE_FRAME_MS {
            self.frame_index = (self.frame_index + 1) % OBSTACLE_FRAMES;
            self.frame_timer = 0.0;
        }
    }
}

/// Live obstacles plus the spawn scheduler
#[derive(Debug, Clone)]
pub struct ObstacleField {
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Milliseconds since the last spawn
    pub spawn_timer: f32,
    /// Obstacles that scrolled off the left edge this run
    pub cleared: u32,
    motion: ObstacleMotion,
    max_obstacles: usize,
    /// Cosmetic only: vertical jitter of new spawns
    rng: Pcg32,
    next_id: u32,
}

impl ObstacleField {
    pub fn new(seed: u64, motion: ObstacleMotion, max_obstacles: usize) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            cleared: 0,
            motion,
            max_obstacles: max_obstacles.max(1),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Drop every obstacle and restart the scheduler with a fresh seed.
    /// Ids keep counting up so a reset never resurrects an old identity.
    pub fn reset(&mut self, seed: u64) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
        self.cleared = 0;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Scroll every obstacle left and prune the ones fully off screen.
    ///
    /// Movement is per tick and ignores `dt`, which only drives animation.
    /// Returns the ids removed, in field order.
    pub fn advance(&mut self, dt: f32, global_speed: f32) -> Vec<u32> {
        let motion = self.motion;
        for obstacle in &mut self.obstacles {
            let step = match motion {
                ObstacleMotion::Global => global_speed,
                ObstacleMotion::Captured => obstacle.speed,
            };
            obstacle.pos.x -= step;
            obstacle.animate(dt);
        }

        let mut removed = Vec::new();
        self.obstacles.retain(|o| {
            if o.is_off_screen() {
                removed.push(o.id);
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            self.cleared += removed.len() as u32;
            log::debug!("Pruned obstacles {:?}", removed);
        }
        removed
    }

    /// Accumulate `dt` and spawn once the timer passes the speed-adjusted
    /// interval. Returns the new obstacle's id.
    pub fn maybe_spawn(
        &mut self,
        dt: f32,
        profile: &DifficultyProfile,
        current_speed: f32,
    ) -> Option<u32> {
        self.spawn_timer += dt;
        if self.spawn_timer <= profile.effective_spawn_interval(current_speed) {
            return None;
        }
        self.spawn_timer = 0.0;

        if self.obstacles.len() >= self.max_obstacles {
            log::warn!("Obstacle cap ({}) reached, skipping spawn", self.max_obstacles);
            return None;
        }
        Some(self.spawn(current_speed))
    }

    /// Place a new obstacle at the right edge
    pub fn spawn(&mut self, speed: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let jitter = self.rng.random::<f32>() * OBSTACLE_Y_JITTER;
        let y = GROUND_LINE - OBSTACLE_HEIGHT - jitter;
        self.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(OBSTACLE_SPAWN_X, y),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            speed,
            frame_index: 0,
            frame_timer: 0.0,
        });
        log::debug!("Spawned obstacle {} at y={:.1} speed={:.2}", id, y, speed);
        id
    }
}
