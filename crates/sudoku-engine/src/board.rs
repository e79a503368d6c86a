use serde::{Deserialize, Serialize};

/// A cell coordinate on the 9x9 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position (row and col must be in 0..9)
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Index of the 3x3 box containing this position (0..9)
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Top-left corner of the 3x3 box containing this position
    pub fn box_origin(&self) -> Position {
        Position::new(self.row - self.row % 3, self.col - self.col % 3)
    }

    /// Iterate over all 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position::new(row, col)))
    }
}

/// A 9x9 Sudoku board. Cell values are 0..=9, with 0 meaning empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board(pub [[u8; 9]; 9]);

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Create an all-empty board
    pub fn empty() -> Self {
        Self([[0; 9]; 9])
    }

    /// Get the value at a position (0 = empty)
    pub fn get(&self, pos: Position) -> u8 {
        self.0[pos.row][pos.col]
    }

    /// Set the value at a position
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9);
        self.0[pos.row][pos.col] = value;
    }

    /// Check if a cell is empty
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// First empty position in row-major order, if any
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.is_empty_cell(pos))
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        Position::all().filter(|&pos| self.is_empty_cell(pos)).count()
    }

    /// Number of filled cells (clues, on a puzzle board)
    pub fn filled_count(&self) -> usize {
        81 - self.empty_count()
    }

    /// Check whether placing `value` at `pos` violates row, column, or box
    /// uniqueness. Scans all 27 peers including the target cell, so the
    /// caller must ensure the target cell is empty.
    pub fn is_valid_placement(&self, pos: Position, value: u8) -> bool {
        for i in 0..9 {
            if self.0[pos.row][i] == value {
                return false;
            }
            if self.0[i][pos.col] == value {
                return false;
            }
        }

        let origin = pos.box_origin();
        for row in origin.row..origin.row + 3 {
            for col in origin.col..origin.col + 3 {
                if self.0[row][col] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Check that every row, column, and 3x3 box is a permutation of 1..=9
    pub fn is_solved(&self) -> bool {
        let is_permutation = |values: [u8; 9]| {
            let mut seen = [false; 10];
            for v in values {
                if v == 0 || seen[v as usize] {
                    return false;
                }
                seen[v as usize] = true;
            }
            true
        };

        for i in 0..9 {
            let row: [u8; 9] = self.0[i];
            let col: [u8; 9] = std::array::from_fn(|j| self.0[j][i]);
            let boxed: [u8; 9] =
                std::array::from_fn(|j| self.0[(i / 3) * 3 + j / 3][(i % 3) * 3 + j % 3]);
            if !is_permutation(row) || !is_permutation(col) || !is_permutation(boxed) {
                return false;
            }
        }
        true
    }

    /// Parse a board from an 81-character string ('0' or '.' for empty)
    pub fn from_string(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 81 {
            return None;
        }

        let mut board = Self::empty();
        for (i, c) in chars.iter().enumerate() {
            let value = match c {
                '0' | '.' => 0,
                '1'..='9' => *c as u8 - b'0',
                _ => return None,
            };
            board.0[i / 9][i % 9] = value;
        }
        Some(board)
    }

    /// Render the board as an 81-character string ('0' for empty)
    pub fn to_string_compact(&self) -> String {
        let mut s = String::with_capacity(81);
        for pos in Position::all() {
            s.push((b'0' + self.get(pos)) as char);
        }
        s
    }
}

/// Collect every peer of `pos` (same row, column, or box, excluding `pos`
/// itself) whose live value equals `value`. The `value_at` lookup lets the
/// caller merge prefilled clues with user entries, so conflicts are computed
/// against what the player actually sees.
pub fn conflicting_peers<F>(pos: Position, value: u8, value_at: F) -> Vec<Position>
where
    F: Fn(Position) -> u8,
{
    let mut conflicts = Vec::new();

    for i in 0..9 {
        let peer = Position::new(pos.row, i);
        if i != pos.col && value_at(peer) == value {
            conflicts.push(peer);
        }
    }

    for i in 0..9 {
        let peer = Position::new(i, pos.col);
        if i != pos.row && value_at(peer) == value {
            conflicts.push(peer);
        }
    }

    let origin = pos.box_origin();
    for row in origin.row..origin.row + 3 {
        for col in origin.col..origin.col + 3 {
            let peer = Position::new(row, col);
            if peer != pos && value_at(peer) == value && !conflicts.contains(&peer) {
                conflicts.push(peer);
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_position_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
        assert_eq!(Position::new(2, 5).box_index(), 1);
        assert_eq!(Position::new(6, 2).box_index(), 6);
    }

    #[test]
    fn test_string_round_trip() {
        let board = Board::from_string(SOLVED).unwrap();
        assert_eq!(board.to_string_compact(), SOLVED);
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(Board::from_string("123").is_none());
        assert!(Board::from_string(&"x".repeat(81)).is_none());
    }

    #[test]
    fn test_is_solved() {
        let board = Board::from_string(SOLVED).unwrap();
        assert!(board.is_solved());

        // Swap two cells in a row to break it
        let mut broken = board;
        broken.set(Position::new(0, 0), 4);
        assert!(!broken.is_solved());

        assert!(!Board::empty().is_solved());
    }

    #[test]
    fn test_valid_placement_detects_row_col_box() {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), 5);

        // Same row
        assert!(!board.is_valid_placement(Position::new(0, 8), 5));
        // Same column
        assert!(!board.is_valid_placement(Position::new(8, 0), 5));
        // Same box
        assert!(!board.is_valid_placement(Position::new(2, 2), 5));
        // Unrelated cell
        assert!(board.is_valid_placement(Position::new(4, 4), 5));
        // Different value is fine anywhere
        assert!(board.is_valid_placement(Position::new(0, 8), 6));
    }

    #[test]
    fn test_conflicting_peers_excludes_target() {
        let mut board = Board::empty();
        board.set(Position::new(3, 3), 7);
        board.set(Position::new(3, 7), 7);

        let conflicts = conflicting_peers(Position::new(3, 3), 7, |p| board.get(p));
        assert_eq!(conflicts, vec![Position::new(3, 7)]);
    }

    #[test]
    fn test_conflicting_peers_no_duplicates_in_box() {
        // A peer sharing both row and box with the target must appear once
        let mut board = Board::empty();
        board.set(Position::new(0, 1), 9);

        let conflicts = conflicting_peers(Position::new(0, 0), 9, |p| board.get(p));
        assert_eq!(conflicts, vec![Position::new(0, 1)]);
    }
}
