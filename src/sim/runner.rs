//! The player's runner and its vertical-motion integrator

use glam::Vec2;
use super::collision::Rect;
use super::difficulty::DifficultyProfile;
use crate::consts::*;

/// What changed during one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerStep {
    Grounded,
    Airborne,
    Landed,
}

/// Player body. Only x is fixed; y moves with jumps.
#[derive(Debug, Clone)]
pub struct RunnerBody {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
    pub airborne: bool,
    pub frame_index: u8,
    frame_timer: f32,
}

impl Default for RunnerBody {
    fn default() -> Self {
        Self {
            pos: Vec2::new(RUNNER_X, RUNNER_GROUND_Y),
            size: Vec2::new(RUNNER_WIDTH, RUNNER_HEIGHT),
            velocity_y: 0.0,
            airborne: false,
            frame_index: 0,
            frame_timer: 0.0,
        }
    }
}

impl RunnerBody {
    /// Y of the top edge when standing
    #[inline]
    pub fn ground_y(&self) -> f32 {
        GROUND_LINE - self.size.y
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Apply the jump impulse if standing. Returns true if it took effect.
    ///
    /// Repeated calls while airborne are ignored (no double jump). The phase
    /// check lives with the caller.
    pub fn jump(&mut self, profile: &DifficultyProfile) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity_y = profile.jump_force;
        self.airborne = true;
        true
    }

    /// Advance one tick.
    ///
    /// Gravity and velocity are per-tick quantities and ignore `dt`; only the
    /// running animation uses real time.
    pub fn integrate(&mut self, dt: f32, profile: &DifficultyProfile) -> RunnerStep {
        self.animate(dt);

        if !self.airborne {
            self.pos.y = self.ground_y();
            self.velocity_y = 0.0;
            return RunnerStep::Grounded;
        }

        self.velocity_y += profile.gravity;
        self.pos.y += self.velocity_y;

        let ground = self.ground_y();
        if self.pos.y >= ground {
            self.pos.y = ground;
            self.velocity_y = 0.0;
            self.airborne = false;
            return RunnerStep::Landed;
        }
        RunnerStep::Airborne
    }

    fn animate(&mut self, dt: f32) {
        self.frame_timer += dt;
        if self.frame_timer > RUNNER_FRAME_MS {
            self.frame_index = (self.frame_index + 1) % RUNNER_FRAMES;
            self.frame_timer = 0.0;
        }
    }
}
