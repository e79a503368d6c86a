/// Simple PCG-style PRNG, seeded from `getrandom` for WASM compatibility.
///
/// The engine only needs uniform shuffles and bounded indices, so a small
/// self-contained generator keeps the dependency surface identical on native
/// and wasm32 targets.
pub struct SimpleRng {
    state: u64,
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleRng {
    /// Create a generator seeded from the platform entropy source
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    /// Uniform value in [0, bound)
    pub fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }

    /// The digits 1..=9 in uniformly random order
    pub fn shuffled_digits(&mut self) -> [u8; 9] {
        let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.shuffle(&mut digits);
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffled_digits_is_permutation() {
        let mut rng = SimpleRng::with_seed(42);
        for _ in 0..100 {
            let mut digits = rng.shuffled_digits();
            digits.sort_unstable();
            assert_eq!(digits, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        }
    }

    #[test]
    fn test_seeded_determinism() {
        let mut a = SimpleRng::with_seed(7);
        let mut b = SimpleRng::with_seed(7);
        for _ in 0..50 {
            assert_eq!(a.next_usize(81), b.next_usize(81));
        }
    }

    #[test]
    fn test_next_usize_in_bounds() {
        let mut rng = SimpleRng::with_seed(1);
        for _ in 0..1000 {
            assert!(rng.next_usize(9) < 9);
        }
    }

    #[test]
    fn test_shuffle_varies_order() {
        // Across many shuffles, the first digit should not always be the same
        let mut rng = SimpleRng::with_seed(3);
        let mut seen_first = std::collections::HashSet::new();
        for _ in 0..50 {
            seen_first.insert(rng.shuffled_digits()[0]);
        }
        assert!(seen_first.len() > 1);
    }
}
