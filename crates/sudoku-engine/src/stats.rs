//! Persisted player statistics and leaderboard.
//!
//! The whole record is serialized as one JSON document under a single key in
//! a caller-supplied key-value store, loaded once at startup (zeroed default
//! on absent or corrupt data) and rewritten in full after every completion
//! or reset.

use crate::generator::Difficulty;
use crate::session::CompletionEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key for the serialized stats record
pub const STATS_KEY: &str = "sudokuStats";

/// Maximum number of leaderboard entries kept
pub const MAX_LEADERBOARD_ENTRIES: usize = 10;

/// Minimal key-value store the stats record persists through. The browser
/// build backs this with `localStorage`; tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// In-memory store for tests and native use
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

/// Best completion time per difficulty, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTimes {
    pub easy: Option<u64>,
    pub medium: Option<u64>,
    pub hard: Option<u64>,
}

impl BestTimes {
    pub fn get(&self, difficulty: Difficulty) -> Option<u64> {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut Option<u64> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// One leaderboard row: a completed solve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub difficulty: Difficulty,
    /// Completion time in seconds
    #[serde(rename = "time")]
    pub time_secs: u64,
    /// ISO-8601 timestamp of the completion
    pub date: String,
}

/// The persisted statistics record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub puzzles_solved: u64,
    pub best_times: BestTimes,
    /// Accumulated completion time across all solves, in seconds
    pub total_time: u64,
    /// Best completion records, ascending by time, at most
    /// [`MAX_LEADERBOARD_ENTRIES`]
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Owns the stats record and its backing store
pub struct StatsManager<S: KeyValueStore> {
    stats: Stats,
    store: S,
}

impl<S: KeyValueStore> StatsManager<S> {
    /// Load stats from the store, defaulting to a zeroed record when the key
    /// is absent or the stored JSON does not parse.
    pub fn load(store: S) -> Self {
        let stats = store
            .get(STATS_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        Self { stats, store }
    }

    /// The current record
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Best time for a difficulty, if any solve has been recorded
    pub fn best_time(&self, difficulty: Difficulty) -> Option<u64> {
        self.stats.best_times.get(difficulty)
    }

    /// Write the full record back to the store
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string(&self.stats) {
            self.store.set(STATS_KEY, &json);
        }
    }

    /// Record a verified completion: bump the solve count, fold the time
    /// into the totals and best-time table, insert a leaderboard entry
    /// (kept sorted ascending by time, capped at 10), and save.
    pub fn record_completion(&mut self, event: CompletionEvent, timestamp: &str) {
        self.stats.puzzles_solved += 1;
        self.stats.total_time += event.elapsed_secs;

        let best = self.stats.best_times.slot_mut(event.difficulty);
        if best.map_or(true, |t| event.elapsed_secs < t) {
            *best = Some(event.elapsed_secs);
        }

        let entry = LeaderboardEntry {
            difficulty: event.difficulty,
            time_secs: event.elapsed_secs,
            date: timestamp.to_string(),
        };
        let at = self
            .stats
            .leaderboard
            .iter()
            .position(|e| e.time_secs > entry.time_secs)
            .unwrap_or(self.stats.leaderboard.len());
        self.stats.leaderboard.insert(at, entry);
        self.stats.leaderboard.truncate(MAX_LEADERBOARD_ENTRIES);

        self.save();
    }

    /// Reset the record to defaults and save
    pub fn reset(&mut self) {
        self.stats = Stats::default();
        self.save();
    }
}

/// Format seconds as MM:SS
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format seconds as HH:MM:SS
pub fn format_long_time(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
