//! High score leaderboard
//!
//! Top 10 runs across all difficulties. A difficulty keeps only its scores
//! that are at least as good as the newest one added for it.

use serde::{Deserialize, Serialize};

use crate::persistence::{PersistError, Storage, load_json, save_json};
use crate::sim::{Difficulty, RunOutcome};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    pub difficulty: Difficulty,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "dragon_runner_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rank (1-indexed) a score would get, None if it wouldn't make the board
    pub fn potential_rank(&self, score: u64, difficulty: Difficulty) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let ahead = self
            .entries
            .iter()
            .filter(|e| Self::survives(e, score, difficulty))
            .take_while(|e| e.score >= score)
            .count();
        let rank = ahead + 1;
        (rank <= MAX_HIGH_SCORES).then_some(rank)
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64, difficulty: Difficulty) -> bool {
        self.potential_rank(score, difficulty).is_some()
    }

    /// Add a score. Returns the rank achieved or None if it didn't qualify.
    pub fn add_score(&mut self, score: u64, difficulty: Difficulty, timestamp: f64) -> Option<usize> {
        let rank = self.potential_rank(score, difficulty)?;
        self.entries.retain(|e| Self::survives(e, score, difficulty));
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                score,
                difficulty,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Record a finished run
    pub fn record(&mut self, outcome: &RunOutcome, timestamp: f64) -> Option<usize> {
        self.add_score(outcome.final_score, outcome.difficulty, timestamp)
    }

    /// Best score for a difficulty, 0 if none
    pub fn best_for(&self, difficulty: Difficulty) -> u64 {
        self.entries
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .map(|e| e.score)
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn load(storage: &dyn Storage) -> Self {
        let scores: Self = load_json(storage, Self::STORAGE_KEY);
        log::info!("{} high scores on record", scores.entries.len());
        scores
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), PersistError> {
        save_json(storage, Self::STORAGE_KEY, self)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }

    fn survives(entry: &HighScoreEntry, score: u64, difficulty: Difficulty) -> bool {
        entry.difficulty != difficulty || entry.score >= score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_sorted_and_capped() {
        let mut hs = HighScores::new();
        use Difficulty::*;
        // Each difficulty's scores arrive in falling order, so none replace another
        let runs = [
            (90, Easy), (100, Medium), (50, Easy), (95, Medium), (30, Easy), (70, Hard),
            (20, Easy), (60, Hard), (110, Extreme), (10, Easy), (55, Hard), (40, Medium),
        ];
        for (i, (score, d)) in runs.iter().enumerate() {
            hs.add_score(*score, *d, i as f64);
        }
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert!(hs.entries.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(hs.top_score(), Some(110));
    }

    #[test]
    fn test_same_difficulty_lower_scores_replaced() {
        let mut hs = HighScores::new();
        hs.add_score(100, Difficulty::Easy, 0.0);
        hs.add_score(50, Difficulty::Easy, 1.0);
        hs.add_score(80, Difficulty::Hard, 2.0);
        // Beats the easy 50 but not the easy 100
        assert_eq!(hs.add_score(70, Difficulty::Easy, 3.0), Some(3));
        let scores: Vec<u64> = hs.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![100, 80, 70]);
        assert_eq!(hs.best_for(Difficulty::Easy), 100);
        assert_eq!(hs.best_for(Difficulty::Extreme), 0);
    }

    #[test]
    fn test_zero_never_qualifies() {
        let hs = HighScores::new();
        assert!(!hs.qualifies(0, Difficulty::Medium));
        assert_eq!(hs.potential_rank(1, Difficulty::Medium), Some(1));
    }

    #[test]
    fn test_full_board_rejects_low_score() {
        let mut hs = HighScores::new();
        for i in 0..10u64 {
            hs.add_score(100 + i, Difficulty::Hard, 0.0);
        }
        // Each hard score removed the lower ones before it
        assert_eq!(hs.entries.len(), 1);
        assert_eq!(hs.top_score(), Some(109));
        let mut full = HighScores::new();
        for (i, d) in Difficulty::ALL.iter().cycle().take(10).enumerate() {
            full.entries.push(HighScoreEntry {
                score: 1000 - i as u64,
                difficulty: *d,
                timestamp: 0.0,
            });
        }
        assert_eq!(full.add_score(5, Difficulty::Easy, 0.0), None);
        assert_eq!(full.add_score(995, Difficulty::Easy, 0.0), Some(7));
    }

    #[test]
    fn test_record_outcome_and_persist() {
        let mut storage = MemoryStorage::new();
        let mut hs = HighScores::load(&storage);
        let outcome = RunOutcome {
            final_score: 321,
            difficulty: Difficulty::Hard,
            obstacles_cleared: 4,
            level: 1,
            ticks: 2000,
        };
        assert_eq!(hs.record(&outcome, 1.0), Some(1));
        hs.save(&mut storage).unwrap();
        let back = HighScores::load(&storage);
        assert_eq!(back.entries, hs.entries);
    }
}
