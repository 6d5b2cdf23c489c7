//! Lifetime play statistics

use serde::{Deserialize, Serialize};

use crate::persistence::{PersistError, Storage, load_json, save_json};
use crate::sim::RunOutcome;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_games: u32,
    /// Sum of all scores
    pub total_distance: u64,
    pub total_obstacles: u64,
    pub best_score: u64,
    pub average_score: u64,
    pub longest_run: u64,
    /// Unix timestamp (ms) of the last finished run
    pub last_played: Option<f64>,
}

impl Stats {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "dragon_runner_stats";

    pub fn record_run(&mut self, outcome: &RunOutcome, timestamp: f64) {
        let score = outcome.final_score;
        self.total_games += 1;
        self.last_played = Some(timestamp);
        self.total_distance += score;
        self.total_obstacles += u64::from(outcome.obstacles_cleared);
        self.best_score = self.best_score.max(score);
        self.longest_run = self.longest_run.max(score);

        let games = u64::from(self.total_games);
        self.average_score = (self.total_distance + games / 2) / games;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn load(storage: &dyn Storage) -> Self {
        load_json(storage, Self::STORAGE_KEY)
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), PersistError> {
        save_json(storage, Self::STORAGE_KEY, self)
    }

    /// Reset and drop the stored record
    pub fn clear(&mut self, storage: &mut dyn Storage) -> Result<(), PersistError> {
        self.reset();
        storage.remove(Self::STORAGE_KEY)?;
        log::info!("Stats cleared");
        Ok(())
    }
}
