//! Browser bridge (wasm32 only)
//!
//! JavaScript owns the canvas, the audio and the `requestAnimationFrame`
//! handle. Each animation frame it calls [`WebSession::frame`] and draws the
//! returned JSON snapshot. When the report says `running: false` the JS side
//! must cancel its frame request; stale frames that slip through are no-ops.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::fps::FpsMeter;
use super::input::intent_for_key;
use crate::highscores::HighScores;
use crate::persistence::{MemoryStorage, PersistError, Storage};
use crate::settings::Settings;
use crate::sim::{Difficulty, GameEvent, GamePhase, Intent, SessionController, Snapshot};
use crate::stats::Stats;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Dragon Runner starting...");
}

fn js_err(e: JsValue) -> PersistError {
    PersistError::Backend(format!("{e:?}"))
}

/// `window.localStorage` behind the storage trait
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, PersistError> {
        let window = web_sys::window().ok_or_else(|| PersistError::Backend("no window".into()))?;
        let inner = window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| PersistError::Backend("localStorage unavailable".into()))?;
        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.inner.get_item(key).map_err(js_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.inner.set_item(key, value).map_err(js_err)
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.inner.remove_item(key).map_err(js_err)
    }
}

#[derive(Serialize)]
struct FrameReport<'a> {
    running: bool,
    snapshot: Snapshot,
    events: &'a [GameEvent],
    /// Present only when the FPS counter is enabled
    fps: Option<u32>,
    best: u64,
}

/// Session plus persisted records, exported to JavaScript
#[wasm_bindgen]
pub struct WebSession {
    session: SessionController,
    settings: Settings,
    highscores: HighScores,
    stats: Stats,
    storage: Box<dyn Storage>,
    fps: FpsMeter,
    last_frame: Option<f64>,
}

#[wasm_bindgen]
impl WebSession {
    /// Optional `tuning_json` overrides the default balance
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> WebSession {
        let tuning = match tuning_json.as_deref().map(Tuning::from_json) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Ignoring tuning override: {e}");
                Tuning::default()
            }
            None => Tuning::default(),
        };
        let storage: Box<dyn Storage> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{e}; records will not persist");
                Box::new(MemoryStorage::new())
            }
        };
        let seed = js_sys::Date::now() as u64;
        log::info!("Session created with seed: {}", seed);

        WebSession {
            session: SessionController::new(tuning, seed),
            settings: Settings::load(storage.as_ref()),
            highscores: HighScores::load(storage.as_ref()),
            stats: Stats::load(storage.as_ref()),
            storage,
            fps: FpsMeter::new(),
            last_frame: None,
        }
    }

    /// Drive one animation frame; returns the JSON frame report
    pub fn frame(&mut self, timestamp: f64) -> String {
        if let Some(last) = self.last_frame.replace(timestamp) {
            self.fps.record((timestamp - last) as f32);
        }
        let events = self.session.frame(timestamp);
        for event in &events {
            if let GameEvent::GameOver(outcome) = event {
                let now = js_sys::Date::now();
                if let Some(rank) = self.highscores.record(outcome, now) {
                    log::info!("New high score #{}: {}", rank, outcome.final_score);
                }
                self.stats.record_run(outcome, now);
                self.persist_records();
            }
        }
        if self.session.phase() != GamePhase::Running {
            self.last_frame = None;
        }

        let report = FrameReport {
            running: self.session.phase() == GamePhase::Running,
            snapshot: self.session.snapshot(),
            events: &events,
            fps: self.settings.show_fps.then(|| self.fps.fps()),
            best: self.highscores.best_for(self.session.difficulty()),
        };
        serde_json::to_string(&report).unwrap_or_else(|e| {
            log::error!("Frame report failed: {e}");
            String::from("{}")
        })
    }

    /// Forward a `KeyboardEvent.code`; returns true if it did something
    pub fn key(&mut self, code: &str) -> bool {
        let difficulty = self.settings.difficulty;
        match intent_for_key(code, self.session.phase(), difficulty) {
            Some(intent) => self.session.apply(intent),
            None => false,
        }
    }

    pub fn start(&mut self, difficulty: &str) -> bool {
        let difficulty = Difficulty::from_str(difficulty).unwrap_or(self.settings.difficulty);
        if difficulty != self.settings.difficulty {
            self.settings.set_difficulty(difficulty);
            self.persist_settings();
        }
        self.session.apply(Intent::Start(difficulty))
    }

    pub fn jump(&mut self) -> bool {
        self.session.apply(Intent::Jump)
    }

    pub fn pause_toggle(&mut self) -> bool {
        self.session.apply(Intent::PauseToggle)
    }

    pub fn restart(&mut self) -> bool {
        self.session.apply(Intent::Restart)
    }

    pub fn go_home(&mut self) -> bool {
        self.session.apply(Intent::GoHome)
    }

    /// Auto-pause when the tab is hidden
    pub fn visibility_hidden(&mut self) {
        if self.session.pause() {
            log::info!("Auto-paused (tab hidden)");
        }
    }

    pub fn toggle_sound(&mut self) -> bool {
        let on = self.settings.toggle_sound();
        self.persist_settings();
        on
    }

    pub fn toggle_music(&mut self) -> bool {
        let on = self.settings.toggle_music();
        self.persist_settings();
        on
    }

    pub fn toggle_fps(&mut self) -> bool {
        let on = self.settings.toggle_fps();
        self.persist_settings();
        on
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        let on = self.settings.toggle_dark_mode();
        self.persist_settings();
        on
    }

    pub fn settings_json(&self) -> String {
        serde_json::to_string(&self.settings).unwrap_or_default()
    }

    pub fn high_scores_json(&self) -> String {
        serde_json::to_string(&self.highscores).unwrap_or_default()
    }

    pub fn stats_json(&self) -> String {
        serde_json::to_string(&self.stats).unwrap_or_default()
    }

    pub fn reset_stats(&mut self) {
        if let Err(e) = self.stats.clear(self.storage.as_mut()) {
            log::warn!("Could not clear stats: {e}");
        }
    }
}

impl WebSession {
    fn persist_settings(&mut self) {
        if let Err(e) = self.settings.save(self.storage.as_mut()) {
            log::warn!("Could not save settings: {e}");
        }
    }

    fn persist_records(&mut self) {
        if let Err(e) = self.highscores.save(self.storage.as_mut()) {
            log::warn!("Could not save high scores: {e}");
        }
        if let Err(e) = self.stats.save(self.storage.as_mut()) {
            log::warn!("Could not save stats: {e}");
        }
    }
}
