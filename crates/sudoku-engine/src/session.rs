//! Game session state: one puzzle/solution pair, the player's entries,
//! conflict flags, and the elapsed-time counter.
//!
//! The session is the single owner of all mutable game state. The rendering
//! layer reads cell views and forwards digit events back; it never mutates
//! the session directly.

use crate::board::{conflicting_peers, Board, Position};
use crate::generator::{Difficulty, Generator, Puzzle};
use crate::rng::SimpleRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What a single cell looks like to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Live value (prefilled clue or user entry), 0 when empty
    pub value: u8,
    /// Whether the cell is a clue and therefore immutable for the player
    pub prefilled: bool,
    /// Whether the cell is currently flagged as conflicting
    pub errored: bool,
}

/// Completion event reported to the statistics aggregator on a verified solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub difficulty: Difficulty,
    pub elapsed_secs: u64,
}

/// Outcome of a whole-board solution check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// Session already solved (or otherwise not active); nothing to check
    Inactive,
    /// At least one cell is still empty
    Incomplete,
    /// Conflict flags are set; the player must fix them first
    ConflictsPresent,
    /// Every cell is filled and unflagged, but some value mismatches the solution
    Incorrect,
    /// The board matches the solution; session is now inactive
    Solved(CompletionEvent),
}

/// Outcome of a hint request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// Session is not active; hints are unavailable
    Inactive,
    /// No empty, unentered cell remains
    Exhausted,
    /// A cell was filled with its solution value
    Filled { pos: Position, value: u8 },
}

/// The game session
pub struct Session {
    /// The puzzle board: nonzero cells are clues, zero cells player-editable
    puzzle: Board,
    /// The full solution (immutable once generated)
    solution: Board,
    /// Difficulty the puzzle was generated at
    difficulty: Difficulty,
    /// User entries for editable cells, 0 = no entry
    entries: [[u8; 9]; 9],
    /// Cells currently flagged as conflicting
    errors: HashSet<Position>,
    /// Whole seconds of play time accrued so far
    elapsed_secs: u64,
    /// False once the puzzle has been solved
    active: bool,
    /// Randomness for hint cell selection
    rng: SimpleRng,
}

impl Session {
    /// Start a new game with a freshly generated puzzle
    pub fn new(difficulty: Difficulty) -> Self {
        let mut generator = Generator::new();
        Self::from_puzzle(generator.generate(difficulty), difficulty)
    }

    /// Start a game from an existing puzzle/solution pair
    pub fn from_puzzle(puzzle: Puzzle, difficulty: Difficulty) -> Self {
        Self {
            puzzle: puzzle.puzzle,
            solution: puzzle.solution,
            difficulty,
            entries: [[0; 9]; 9],
            errors: HashSet::new(),
            elapsed_secs: 0,
            active: true,
            rng: SimpleRng::new(),
        }
    }

    /// The puzzle board (clues only)
    pub fn puzzle(&self) -> &Board {
        &self.puzzle
    }

    /// The solution board
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// The session's difficulty
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the session is still accepting input and accruing time
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Elapsed play time in whole seconds
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Format the elapsed time as MM:SS
    pub fn elapsed_string(&self) -> String {
        crate::stats::format_time(self.elapsed_secs)
    }

    /// Whether a cell is a prefilled clue
    pub fn is_prefilled(&self, pos: Position) -> bool {
        !self.puzzle.is_empty_cell(pos)
    }

    /// Live value of a cell: the clue if prefilled, else the user entry,
    /// else 0 (empty)
    pub fn value_at(&self, pos: Position) -> u8 {
        let clue = self.puzzle.get(pos);
        if clue != 0 {
            clue
        } else {
            self.entries[pos.row][pos.col]
        }
    }

    /// Advance the play clock by one second. No-op once the session has
    /// left the active state, so a tick arriving after a solve (or after a
    /// new game replaced this session) cannot corrupt the counter.
    pub fn tick(&mut self) {
        if self.active {
            self.elapsed_secs += 1;
        }
    }

    /// Place a digit (1..=9) in an editable cell and re-evaluate conflicts.
    /// Returns false when the session is inactive, the cell is prefilled,
    /// or the digit is out of range.
    pub fn set_entry(&mut self, pos: Position, digit: u8) -> bool {
        if !self.active || self.is_prefilled(pos) || !(1..=9).contains(&digit) {
            return false;
        }
        self.entries[pos.row][pos.col] = digit;
        self.validate_cell(pos);
        true
    }

    /// Clear the player's entry in an editable cell. All conflict flags are
    /// dropped without re-evaluation; the next placement recomputes them.
    pub fn clear_entry(&mut self, pos: Position) -> bool {
        if !self.active || self.is_prefilled(pos) {
            return false;
        }
        self.entries[pos.row][pos.col] = 0;
        self.errors.clear();
        true
    }

    /// Recompute conflict flags for the live value at `pos`. Clears every
    /// prior flag first (global re-evaluation), then flags each conflicting
    /// peer plus the cell itself. Idempotent for unchanged state.
    pub fn validate_cell(&mut self, pos: Position) {
        self.errors.clear();

        let value = self.value_at(pos);
        if value == 0 {
            return;
        }

        let conflicts = conflicting_peers(pos, value, |p| self.value_at(p));
        if !conflicts.is_empty() {
            self.errors.extend(conflicts);
            self.errors.insert(pos);
        }
    }

    /// Check the whole board against the solution.
    ///
    /// Fails fast on the first empty cell, then on any standing conflict
    /// flag, then on the first live value differing from the solution; none
    /// of those paths mutate state. Only a full match deactivates the
    /// session and yields the completion event for the stats aggregator.
    pub fn check_solution(&mut self) -> CheckResult {
        if !self.active {
            return CheckResult::Inactive;
        }

        if Position::all().any(|pos| self.value_at(pos) == 0) {
            return CheckResult::Incomplete;
        }

        if !self.errors.is_empty() {
            return CheckResult::ConflictsPresent;
        }

        for pos in Position::all() {
            if self.puzzle.is_empty_cell(pos) && self.value_at(pos) != self.solution.get(pos) {
                return CheckResult::Incorrect;
            }
        }

        self.active = false;
        CheckResult::Solved(CompletionEvent {
            difficulty: self.difficulty,
            elapsed_secs: self.elapsed_secs,
        })
    }

    /// Fill one empty, unentered editable cell (chosen uniformly at random)
    /// with its solution value, then re-evaluate conflicts for it.
    pub fn hint(&mut self) -> HintOutcome {
        if !self.active {
            return HintOutcome::Inactive;
        }

        let empty_cells: Vec<Position> =
            Position::all().filter(|&pos| self.value_at(pos) == 0).collect();
        if empty_cells.is_empty() {
            return HintOutcome::Exhausted;
        }

        let pos = empty_cells[self.rng.next_usize(empty_cells.len())];
        let value = self.solution.get(pos);
        self.entries[pos.row][pos.col] = value;
        self.validate_cell(pos);

        HintOutcome::Filled { pos, value }
    }

    /// Re-deal the same puzzle: clear entries, conflict flags, and the play
    /// clock, keeping the puzzle/solution pair. The session returns to the
    /// active state.
    pub fn reset(&mut self) {
        self.entries = [[0; 9]; 9];
        self.errors.clear();
        self.elapsed_secs = 0;
        self.active = true;
    }

    /// Render view of a single cell
    pub fn cell_view(&self, pos: Position) -> CellView {
        CellView {
            value: self.value_at(pos),
            prefilled: self.is_prefilled(pos),
            errored: self.errors.contains(&pos),
        }
    }

    /// Render view of the whole board, row-major
    pub fn board_view(&self) -> [[CellView; 9]; 9] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.cell_view(Position::new(row, col))))
    }

    /// Cells currently flagged as conflicting
    pub fn errored_cells(&self) -> &HashSet<Position> {
        &self.errors
    }
}
