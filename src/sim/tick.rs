//! One simulation step
//!
//! Order per tick: runner physics, obstacle scroll/prune, spawn, collision,
//! then progression. Physics quantities are per tick; `dt` only feeds the
//! real-time timers (spawn, score, animation).

use super::clock::sanitize_dt;
use super::collision::check_collision;
use super::runner::RunnerStep;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance a running session by one tick. No-op in any other phase.
pub fn tick(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }
    let dt = sanitize_dt(dt);
    state.time_ticks += 1;

    if state.runner.integrate(dt, &state.profile) == RunnerStep::Landed {
        events.push(GameEvent::Landed);
    }

    let speed = state.progress.speed;
    for id in state.field.advance(dt, speed) {
        events.push(GameEvent::ObstacleCleared { id });
    }
    if let Some(id) = state.field.maybe_spawn(dt, &state.profile, speed) {
        events.push(GameEvent::ObstacleSpawned { id });
    }

    let runner = state.runner.rect();
    let hit = state
        .field
        .obstacles
        .iter()
        .find(|o| check_collision(&runner, &o.rect(), state.hitbox_padding))
        .map(|o| o.id);
    if let Some(id) = hit {
        let outcome = state.outcome();
        state.phase = GamePhase::Ended;
        state.field.clear();
        log::info!(
            "Run over: hit obstacle {} at tick {} (score {}, {})",
            id,
            state.time_ticks,
            outcome.final_score,
            outcome.difficulty.as_str()
        );
        events.push(GameEvent::GameOver(outcome));
        return events;
    }

    let step = state.progress.update(dt, &state.profile);
    if let Some(level) = step.level_up {
        log::info!("Level {} reached", level);
        events.push(GameEvent::LevelUp { level });
    }
    state.scroll_background();

    events
}
