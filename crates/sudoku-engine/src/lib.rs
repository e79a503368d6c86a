//! Core Sudoku engine: board generation, constraint validation, session
//! state, and persisted statistics.
//!
//! Puzzles are built by filling an empty 9x9 grid through randomized
//! backtracking, then clearing a difficulty-determined number of cells.
//! Clue removal does not verify that the puzzle keeps a unique solution, so
//! a generated puzzle may admit completions other than the stored one; the
//! session's final check compares against the stored solution only. This is
//! deliberate, documented behavior.
//!
//! The crate has no UI or I/O of its own. A rendering layer consumes cell
//! views and drives the session through digit events, the once-per-second
//! tick, and the check/hint/reset operations; statistics persist through the
//! [`KeyValueStore`] abstraction.

mod board;
mod generator;
mod rng;
mod session;
mod solver;
mod stats;

pub use board::{conflicting_peers, Board, Position};
pub use generator::{Difficulty, Generator, Puzzle};
pub use rng::SimpleRng;
pub use session::{CellView, CheckResult, CompletionEvent, HintOutcome, Session};
pub use solver::Solver;
pub use stats::{
    format_long_time, format_time, BestTimes, KeyValueStore, LeaderboardEntry, MemoryStore, Stats,
    StatsManager, MAX_LEADERBOARD_ENTRIES, STATS_KEY,
};
