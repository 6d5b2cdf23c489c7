use dragon_runner::consts::*;
use dragon_runner::sim::{
    Difficulty, DifficultyProfile, GameEvent, GamePhase, Intent, ObstacleField, ObstacleMotion,
    Rect, SessionController, check_collision,
};
use dragon_runner::{HighScores, Stats, Tuning};

/// Medium tuning with spawning pushed out of reach
fn quiet_medium() -> Tuning {
    let mut tuning = Tuning::default();
    let medium = tuning.profiles.get_mut(Difficulty::Medium);
    medium.spawn_interval = 1.0e9;
    medium.min_spawn_interval = 1.0e9;
    tuning
}

#[test]
fn medium_run_without_obstacles_scores_by_time() {
    let mut session = SessionController::new(quiet_medium(), 1);
    assert!(session.apply(Intent::Start(Difficulty::Medium)));
    assert_eq!(session.speed(), 6.0);

    for _ in 0..500 {
        let events = session.step(16.7);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::GameOver(_))));
    }
    let score = session.score();
    assert!((82..=84).contains(&score), "score {score}");
    assert!((session.speed() - 7.5).abs() < 1e-3, "speed {}", session.speed());
    assert_eq!(session.phase(), GamePhase::Running);
}

#[test]
fn obstacle_despawns_after_154_ticks() {
    let mut field = ObstacleField::new(9, ObstacleMotion::Global, MAX_OBSTACLES);
    let id = field.spawn(6.0);
    let mut ticks = 0;
    loop {
        ticks += 1;
        let removed = field.advance(16.7, 6.0);
        if !removed.is_empty() {
            assert_eq!(removed, vec![id]);
            break;
        }
    }
    assert_eq!(ticks, 154);
    assert!(field.obstacles.iter().all(|o| o.id != id));
    // Fresh spawns never reuse the retired identity
    assert_ne!(field.spawn(6.0), id);
}

#[test]
fn heavy_overlap_collides() {
    let runner = Rect::new(100.0, 260.0, 80.0, 90.0);
    let dragon = Rect::new(100.0, 260.0, 70.0, 60.0);
    assert!(check_collision(&runner, &dragon, 15.0));
}

#[test]
fn obstacle_above_grounded_runner_is_cleared() {
    let runner = Rect::new(RUNNER_X, RUNNER_GROUND_Y, RUNNER_WIDTH, RUNNER_HEIGHT);
    for bottom_gap in [0.0, 15.0, 60.0] {
        let y = RUNNER_GROUND_Y + 15.0 - bottom_gap - OBSTACLE_HEIGHT;
        let dragon = Rect::new(RUNNER_X, y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        assert!(!check_collision(&runner, &dragon, HITBOX_PADDING), "gap {bottom_gap}");
    }
}

#[test]
fn full_lifecycle_reports_one_outcome() {
    let mut session = SessionController::new(Tuning::default(), 77);
    let mut highscores = HighScores::new();
    let mut stats = Stats::default();

    for run in 0..3 {
        let intent = if run == 0 {
            Intent::Start(Difficulty::Extreme)
        } else {
            Intent::Restart
        };
        assert!(session.apply(intent));

        let mut outcomes = 0;
        let mut t = 0.0;
        while session.phase() == GamePhase::Running {
            t += 16.7;
            for event in session.frame(t) {
                if let GameEvent::GameOver(outcome) = event {
                    outcomes += 1;
                    assert_eq!(outcome.difficulty, Difficulty::Extreme);
                    highscores.record(&outcome, t);
                    stats.record_run(&outcome, t);
                }
            }
            assert!(t < 600_000.0, "run never ended");
        }
        // Stale frames after the end change nothing
        assert!(session.frame(t + 16.7).is_empty());
        assert_eq!(outcomes, 1);
    }
    assert_eq!(stats.total_games, 3);
    assert!(highscores.best_for(Difficulty::Extreme) > 0);

    assert!(session.apply(Intent::GoHome));
    assert_eq!(session.phase(), GamePhase::Idle);
    assert!(!session.apply(Intent::Restart));
}

#[test]
fn spawn_interval_floor_holds_for_overridden_profiles() {
    let profile = DifficultyProfile {
        base_speed: 2.0,
        speed_increment: 0.5,
        max_speed: 100.0,
        spawn_interval: 3000.0,
        min_spawn_interval: 250.0,
        jump_force: -10.0,
        gravity: 0.5,
    };
    for speed in [2.0, 10.0, 29.0, 30.0, 100.0] {
        assert!(profile.effective_spawn_interval(speed) >= 250.0);
    }
    assert_eq!(profile.effective_spawn_interval(100.0), 250.0);
}
