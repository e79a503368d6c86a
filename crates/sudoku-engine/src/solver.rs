//! Backtracking board solver.
//!
//! Fills empty cells in row-major order, trying candidate digits in a
//! randomized order so that repeated runs produce different complete boards.

use crate::board::Board;
use crate::rng::SimpleRng;

/// Unit struct solver; stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Fill the board's empty cells into a complete valid assignment,
    /// mutating it in place. Returns `true` on success; on failure the board
    /// is left as it was (every tentative placement is reverted).
    ///
    /// Recursion depth is bounded by the number of empty cells (at most 81).
    pub fn solve(&self, board: &mut Board, rng: &mut SimpleRng) -> bool {
        let pos = match board.first_empty() {
            Some(pos) => pos,
            // No empty cell remains: the board is fully solved
            None => return true,
        };

        for value in rng.shuffled_digits() {
            if board.is_valid_placement(pos, value) {
                board.set(pos, value);
                if self.solve(board, rng) {
                    return true;
                }
                board.set(pos, 0);
            }
        }

        false
    }

    /// Produce a complete random solution from an empty board. Always
    /// succeeds: an empty 9x9 grid admits a valid assignment down every
    /// randomized branch the search commits to.
    pub fn generate_solution(&self, rng: &mut SimpleRng) -> Board {
        let mut board = Board::empty();
        let solved = self.solve(&mut board, rng);
        debug_assert!(solved);
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    #[test]
    fn test_generate_solution_is_valid() {
        let mut rng = SimpleRng::with_seed(42);
        let solver = Solver::new();
        let board = solver.generate_solution(&mut rng);
        assert!(board.is_solved());
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_generated_solutions_vary() {
        let solver = Solver::new();
        let a = solver.generate_solution(&mut SimpleRng::with_seed(1));
        let b = solver.generate_solution(&mut SimpleRng::with_seed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_solve_completes_partial_board() {
        let mut board = Board::from_string(
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
        )
        .unwrap();
        let solver = Solver::new();
        assert!(solver.solve(&mut board, &mut SimpleRng::with_seed(42)));
        assert!(board.is_solved());
        // Clues are untouched
        assert_eq!(board.get(Position::new(0, 0)), 5);
        assert_eq!(board.get(Position::new(8, 8)), 9);
    }

    #[test]
    fn test_solve_reports_failure_and_reverts() {
        // Row 0 already holds 1..=8; cell (0,8) can only be 9, but 9 sits
        // in the same column, so the board is unsolvable.
        let mut board = Board::empty();
        for (col, value) in (0..8).zip(1..=8) {
            board.set(Position::new(0, col), value);
        }
        board.set(Position::new(5, 8), 9);

        let before = board;
        let solver = Solver::new();
        assert!(!solver.solve(&mut board, &mut SimpleRng::with_seed(42)));
        assert_eq!(board, before);
    }
}
