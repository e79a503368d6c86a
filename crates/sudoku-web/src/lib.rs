//! WebAssembly boundary for the Sudoku engine.
//!
//! The page owns rendering and input widgets; this crate owns all game
//! state. JS forwards player keystrokes as digit/clear events, polls
//! [`SudokuApp::board_state`] to redraw, and drives the play clock by
//! calling [`SudokuApp::tick`] from a one-second interval.

use serde::Serialize;
use sudoku_engine::{
    format_time, CheckResult, Difficulty, HintOutcome, KeyValueStore, Position, Session,
    StatsManager,
};
use wasm_bindgen::prelude::*;

mod storage;

// WASM tests require wasm-pack test to run
#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use storage::LocalStorage;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Status object returned to JS from check/hint/reset operations
#[derive(Serialize)]
struct StatusReport {
    status: &'static str,
    message: String,
}

/// Hint result returned to JS; `row`/`col`/`value` are present only when a
/// cell was filled
#[derive(Serialize)]
struct HintReport {
    status: &'static str,
    message: String,
    row: Option<usize>,
    col: Option<usize>,
    value: Option<u8>,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn parse_difficulty(name: &str) -> Difficulty {
    Difficulty::from_name(name).unwrap_or_default()
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct SudokuApp {
    session: Session,
    stats: StatsManager<LocalStorage>,
    prefs: LocalStorage,
}

#[wasm_bindgen]
impl SudokuApp {
    /// Create the controller and deal the first puzzle. Statistics are
    /// loaded from `localStorage` once, here.
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: &str) -> Result<SudokuApp, JsValue> {
        let prefs = LocalStorage::new()?;
        let stats = StatsManager::load(prefs.clone());
        Ok(SudokuApp {
            session: Session::new(parse_difficulty(difficulty)),
            stats,
            prefs,
        })
    }

    /// Start a new game with a freshly generated puzzle. The page must
    /// clear the previous one-second interval before starting the next, so
    /// a stale callback never ticks a discarded session.
    pub fn new_game(&mut self, difficulty: &str) {
        self.session = Session::new(parse_difficulty(difficulty));
    }

    /// Re-deal the current puzzle: entries, conflict flags, and the play
    /// clock are cleared; the board stays the same.
    pub fn reset_game(&mut self) -> Result<JsValue, JsValue> {
        self.session.reset();
        to_js(&StatusReport {
            status: "reset",
            message: "Game has been reset.".to_string(),
        })
    }

    /// Advance the play clock by one second (call from a 1s interval).
    /// No-op once the puzzle is solved.
    pub fn tick(&mut self) {
        self.session.tick();
    }

    /// Forward a digit keystroke for a cell. Out-of-range coordinates or
    /// digits are silently discarded, mirroring keyboard input rejection.
    pub fn set_digit(&mut self, row: usize, col: usize, digit: u8) -> bool {
        if row >= 9 || col >= 9 {
            return false;
        }
        self.session.set_entry(Position::new(row, col), digit)
    }

    /// Forward a delete/backspace keystroke for a cell
    pub fn clear_cell(&mut self, row: usize, col: usize) -> bool {
        if row >= 9 || col >= 9 {
            return false;
        }
        self.session.clear_entry(Position::new(row, col))
    }

    /// The 9x9 array of cell views (value, prefilled, errored) the page
    /// redraws from
    pub fn board_state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.board_view())
    }

    /// Check the board against the solution. On a verified solve the
    /// session goes inactive and the completion is recorded to statistics.
    pub fn check(&mut self) -> Result<JsValue, JsValue> {
        let report = match self.session.check_solution() {
            CheckResult::Inactive => StatusReport {
                status: "inactive",
                message: String::new(),
            },
            CheckResult::Incomplete => StatusReport {
                status: "incomplete",
                message: "Please fill in all cells before checking.".to_string(),
            },
            CheckResult::ConflictsPresent => StatusReport {
                status: "errors",
                message: "There are errors in your solution. Please fix them and try again."
                    .to_string(),
            },
            CheckResult::Incorrect => StatusReport {
                status: "incorrect",
                message: "Your solution is incorrect. Keep trying!".to_string(),
            },
            CheckResult::Solved(event) => {
                let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
                self.stats.record_completion(event, &timestamp);
                StatusReport {
                    status: "solved",
                    message: format!("Solved in {}!", format_time(event.elapsed_secs)),
                }
            }
        };
        to_js(&report)
    }

    /// Fill one random empty cell with its solution value
    pub fn hint(&mut self) -> Result<JsValue, JsValue> {
        let report = match self.session.hint() {
            HintOutcome::Inactive => HintReport {
                status: "inactive",
                message: String::new(),
                row: None,
                col: None,
                value: None,
            },
            HintOutcome::Exhausted => HintReport {
                status: "exhausted",
                message: "No empty cells left to fill!".to_string(),
                row: None,
                col: None,
                value: None,
            },
            HintOutcome::Filled { pos, value } => HintReport {
                status: "filled",
                message: String::new(),
                row: Some(pos.row),
                col: Some(pos.col),
                value: Some(value),
            },
        };
        to_js(&report)
    }

    /// Elapsed play time in seconds
    pub fn elapsed_secs(&self) -> u32 {
        self.session.elapsed_secs() as u32
    }

    /// Elapsed play time formatted as MM:SS
    pub fn elapsed_string(&self) -> String {
        self.session.elapsed_string()
    }

    /// Current difficulty name ("easy", "medium", "hard")
    pub fn difficulty(&self) -> String {
        self.session.difficulty().to_string()
    }

    /// Whether the session is still accepting input and accruing time
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// The persisted statistics record (puzzlesSolved, bestTimes,
    /// totalTime, leaderboard)
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_js(self.stats.stats())
    }

    /// The statistics record as a JSON string (matches the persisted shape)
    pub fn stats_json(&self) -> String {
        serde_json::to_string(self.stats.stats()).unwrap_or_default()
    }

    /// Best time in seconds for a difficulty, if any solve is recorded
    pub fn best_time(&self, difficulty: &str) -> Option<u32> {
        self.stats
            .best_time(parse_difficulty(difficulty))
            .map(|t| t as u32)
    }

    /// Reset all statistics to defaults and persist the zeroed record
    pub fn reset_stats(&mut self) -> Result<JsValue, JsValue> {
        self.stats.reset();
        to_js(&StatusReport {
            status: "reset",
            message: "Stats have been reset.".to_string(),
        })
    }

    /// Persist the theme preference ("dark" or "light")
    pub fn set_theme(&self, theme: &str) {
        self.prefs.set(storage::THEME_KEY, theme);
    }

    /// The persisted theme preference, if any
    pub fn theme(&self) -> Option<String> {
        self.prefs.get(storage::THEME_KEY)
    }

    /// Persist the font-family preference
    pub fn set_font(&self, font: &str) {
        self.prefs.set(storage::FONT_KEY, font);
    }

    /// The persisted font-family preference, if any
    pub fn font(&self) -> Option<String> {
        self.prefs.get(storage::FONT_KEY)
    }
}
