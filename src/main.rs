//! Dragon Runner entry point
//!
//! Native builds run a headless autopilot session and record the result.
//! The browser build is driven from JavaScript through `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use dragon_runner::platform::{FileStorage, FpsMeter};
    use dragon_runner::sim::{Difficulty, GameEvent, GamePhase, Intent, SessionController, Snapshot};
    use dragon_runner::{HighScores, Settings, Stats, Tuning};

    /// Fixed frame cadence for headless runs (ms)
    const FRAME_MS: f64 = 16.7;
    /// Give up after ten simulated minutes
    const MAX_FRAMES: u64 = 36_000;

    fn unix_millis() -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }

    /// Jump when the nearest incoming dragon is inside a lead window that
    /// widens with speed, the way a player would time it.
    fn autopilot_wants_jump(snap: &Snapshot) -> bool {
        let runner_front = snap.runner_pos().x + snap.runner.rect.size.x;
        let lead = 40.0 + snap.speed * 12.0;
        snap.obstacles.iter().any(|o| {
            let gap = o.rect.pos.x - runner_front;
            gap > 0.0 && gap < lead
        })
    }

    fn load_tuning() -> Tuning {
        let Ok(path) = std::env::var("DRAGON_RUNNER_TUNING") else {
            return Tuning::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path, e);
                    Tuning::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Dragon Runner (headless) starting...");

        let data_dir =
            std::env::var("DRAGON_RUNNER_DATA").unwrap_or_else(|_| ".dragon-runner".to_string());
        let mut storage = match FileStorage::open(&data_dir) {
            Ok(storage) => storage,
            Err(e) => {
                log::error!("Cannot open {}: {}", data_dir, e);
                std::process::exit(1);
            }
        };
        log::info!("Records stored in {}", storage.dir().display());
        let settings = Settings::load(&storage);

        let mut args = std::env::args().skip(1);
        let difficulty = args
            .next()
            .and_then(|s| {
                let d = Difficulty::from_str(&s);
                if d.is_none() {
                    log::warn!("Unknown difficulty {:?}, using {}", s, settings.difficulty.as_str());
                }
                d
            })
            .unwrap_or(settings.difficulty);
        let seed = args
            .next()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or_else(|| unix_millis() as u64);

        let mut session = SessionController::new(load_tuning(), seed);
        let mut fps = FpsMeter::new();
        session.apply(Intent::Start(difficulty));

        let mut outcome = None;
        let mut timestamp = 0.0;
        for _ in 0..MAX_FRAMES {
            if autopilot_wants_jump(&session.snapshot()) {
                session.apply(Intent::Jump);
            }
            timestamp += FRAME_MS;
            fps.record(FRAME_MS as f32);
            for event in session.frame(timestamp) {
                match event {
                    GameEvent::LevelUp { level } => {
                        log::info!("Level {} at speed {:.2}", level, session.speed());
                    }
                    GameEvent::GameOver(o) => outcome = Some(o),
                    _ => {}
                }
            }
            if session.phase() != GamePhase::Running {
                break;
            }
        }

        let Some(outcome) = outcome else {
            log::info!(
                "Autopilot survived {} frames (score {}), stopping",
                MAX_FRAMES,
                session.score()
            );
            session.apply(Intent::GoHome);
            return;
        };

        log::info!(
            "Final score {} on {} ({} dragons cleared, level {}, {:.1}s, ~{} fps)",
            outcome.final_score,
            outcome.difficulty.as_str(),
            outcome.obstacles_cleared,
            outcome.level,
            outcome.ticks as f64 * FRAME_MS / 1000.0,
            fps.fps()
        );

        let now = unix_millis();
        let mut highscores = HighScores::load(&storage);
        if let Some(rank) = highscores.record(&outcome, now) {
            log::info!("New high score! Rank #{}", rank);
        }
        let mut stats = Stats::load(&storage);
        stats.record_run(&outcome, now);

        if let Err(e) = highscores.save(&mut storage) {
            log::warn!("Could not save high scores: {}", e);
        }
        if let Err(e) = stats.save(&mut storage) {
            log::warn!("Could not save stats: {}", e);
        }
        log::info!(
            "Best on {}: {} | games played: {} | average: {}",
            outcome.difficulty.as_str(),
            highscores.best_for(outcome.difficulty),
            stats.total_games,
            stats.average_score
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is `platform::web::wasm_start`
}
