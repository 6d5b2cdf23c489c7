//! Session lifecycle: the only entry point for input, rendering and audio
//!
//! ```text
//! idle --start--> running <--pause/resume--> paused
//! running --collision--> ended --restart--> running
//! any --go_home--> idle
//! ```

use super::clock::{SimulationClock, sanitize_dt};
use super::difficulty::Difficulty;
use super::state::{GameEvent, GamePhase, GameState, RunOutcome, Snapshot};
use super::tick::tick;
use crate::tuning::Tuning;

/// Discrete requests forwarded by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Jump,
    PauseToggle,
    Restart,
    Start(Difficulty),
    GoHome,
}

/// Owns the session state and drives it one frame at a time
#[derive(Debug, Clone)]
pub struct SessionController {
    state: GameState,
    clock: SimulationClock,
    tuning: Tuning,
    /// Events raised by intents, handed out with the next frame
    pending: Vec<GameEvent>,
    last_outcome: Option<RunOutcome>,
}

impl SessionController {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(&tuning, seed),
            clock: SimulationClock::new(tuning.max_step_frames),
            tuning,
            pending: Vec::new(),
            last_outcome: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    pub fn score(&self) -> u64 {
        self.state.progress.score
    }

    pub fn speed(&self) -> f32 {
        self.state.progress.speed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Read-only access for tests and debug overlays
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Outcome of the most recent finished run
    pub fn last_outcome(&self) -> Option<RunOutcome> {
        self.last_outcome
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Dispatch an input intent. Illegal intents are ignored.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Jump => self.request_jump(),
            Intent::PauseToggle => self.request_pause_toggle(),
            Intent::Restart => self.request_restart(),
            Intent::Start(difficulty) => self.request_start(difficulty),
            Intent::GoHome => self.go_home(),
        }
    }

    /// Begin a run from the menu or the game-over screen
    pub fn request_start(&mut self, difficulty: Difficulty) -> bool {
        if !matches!(self.state.phase, GamePhase::Idle | GamePhase::Ended) {
            return false;
        }
        self.begin(difficulty);
        true
    }

    /// Replay the last difficulty after a run ended
    pub fn request_restart(&mut self) -> bool {
        if self.state.phase != GamePhase::Ended {
            return false;
        }
        self.begin(self.state.difficulty);
        true
    }

    pub fn request_jump(&mut self) -> bool {
        if self.state.phase != GamePhase::Running {
            return false;
        }
        let jumped = self.state.runner.jump(&self.state.profile);
        if jumped {
            self.pending.push(GameEvent::Jumped);
        }
        jumped
    }

    pub fn request_pause_toggle(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Running {
            return false;
        }
        self.state.phase = GamePhase::Paused;
        self.pending.push(GameEvent::Paused);
        log::info!("Paused at score {}", self.state.progress.score);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        // The pause gap must not reach the simulation as one giant delta
        self.clock.reset();
        self.state.phase = GamePhase::Running;
        self.pending.push(GameEvent::Resumed);
        log::info!("Resumed");
        true
    }

    /// Back to the menu from any phase
    pub fn go_home(&mut self) -> bool {
        let difficulty = self.state.difficulty;
        let profile = self.state.profile;
        self.state.reset_run(difficulty, profile);
        self.state.phase = GamePhase::Idle;
        self.clock.reset();
        self.pending.clear();
        log::info!("Returned to menu");
        true
    }

    /// Drive one animation frame from a wall-clock timestamp (ms).
    ///
    /// Safe to call from a stale frame callback: outside `Running` it only
    /// flushes events raised by intents.
    pub fn frame(&mut self, timestamp_ms: f64) -> Vec<GameEvent> {
        if self.state.phase != GamePhase::Running {
            return std::mem::take(&mut self.pending);
        }
        let dt = self.clock.advance(timestamp_ms);
        self.step(dt)
    }

    /// Advance by an explicit delta (ms), bypassing the wall clock
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        let dt = sanitize_dt(dt).min(self.clock.max_step_ms());
        let mut events = std::mem::take(&mut self.pending);
        let tick_events = tick(&mut self.state, dt);
        for event in &tick_events {
            if let GameEvent::GameOver(outcome) = event {
                self.last_outcome = Some(*outcome);
            }
        }
        events.extend(tick_events);
        events
    }

    fn begin(&mut self, difficulty: Difficulty) {
        let profile = *self.tuning.profile(difficulty);
        self.state.reset_run(difficulty, profile);
        self.state.phase = GamePhase::Running;
        self.clock.reset();
        self.pending.clear();
        self.pending.push(GameEvent::Started { difficulty });
        log::info!(
            "Run {} started on {} (speed {:.1}, seed {})",
            self.state.runs,
            difficulty.as_str(),
            profile.base_speed,
            self.state.seed
        );
    }
}
