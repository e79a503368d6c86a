use crate::board::{Board, Position};
use crate::rng::SimpleRng;
use crate::solver::Solver;
use serde::{Deserialize, Serialize};

/// Difficulty level of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl Difficulty {
    /// All difficulty levels, easiest first
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Number of cells cleared from a solved board at this difficulty
    pub fn removal_count(&self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 50,
            Difficulty::Hard => 60,
        }
    }

    /// Number of clues left after removal
    pub fn clue_count(&self) -> usize {
        81 - self.removal_count()
    }

    /// Parse a difficulty from its lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A generated puzzle paired with its solution.
///
/// Invariant: every nonzero cell of `puzzle` equals the corresponding cell
/// of `solution`, and `solution` is a complete valid board.
#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    pub puzzle: Board,
    pub solution: Board,
}

/// Sudoku puzzle generator
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle at the given difficulty: build a complete random
    /// solution, then clear the difficulty's removal count of cells at
    /// uniformly random coordinates. A pick that lands on an already-empty
    /// cell is retried without advancing the counter.
    ///
    /// The removal step does not verify that the puzzle keeps a unique
    /// solution; see the crate docs.
    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        let solver = Solver::new();
        let solution = solver.generate_solution(&mut self.rng);
        let mut puzzle = solution;

        let mut removed = 0;
        while removed < difficulty.removal_count() {
            let pos = Position::new(self.rng.next_usize(9), self.rng.next_usize(9));
            if !puzzle.is_empty_cell(pos) {
                puzzle.set(pos, 0);
                removed += 1;
            }
        }

        Puzzle { puzzle, solution }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_easy_counts() {
        let mut generator = Generator::with_seed(42);
        let Puzzle { puzzle, solution } = generator.generate(Difficulty::Easy);

        assert_eq!(puzzle.empty_count(), 40);
        assert_eq!(puzzle.filled_count(), 41);
        assert!(solution.is_solved());
    }

    #[test]
    fn test_generate_all_difficulties() {
        for &difficulty in Difficulty::all_levels() {
            let mut generator = Generator::with_seed(7);
            let Puzzle { puzzle, .. } = generator.generate(difficulty);
            assert_eq!(puzzle.empty_count(), difficulty.removal_count());
            assert_eq!(puzzle.filled_count(), difficulty.clue_count());
        }
    }

    #[test]
    fn test_clues_match_solution() {
        let mut generator = Generator::with_seed(99);
        let Puzzle { puzzle, solution } = generator.generate(Difficulty::Hard);

        for pos in Position::all() {
            let clue = puzzle.get(pos);
            if clue != 0 {
                assert_eq!(clue, solution.get(pos));
            }
        }
    }

    #[test]
    fn test_difficulty_serde_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
        assert_eq!(
            serde_json::from_str::<Difficulty>("\"hard\"").unwrap(),
            Difficulty::Hard
        );
        assert_eq!(Difficulty::from_name("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_name("extreme"), None);
    }
}
