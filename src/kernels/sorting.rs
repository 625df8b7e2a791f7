//! Array-indexing kernels: prime sieve and bubble sort over LCG-generated input.

/// Seed shared by every runtime's bubble-sort input.
pub const LCG_SEED: u64 = 12_345;
const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 32_768;

/// Linear congruential generator. Each step yields the freshly advanced state,
/// so the first value produced is already one step past the seed.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Iterator for Lcg {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        // state < 2^15, so the product stays far below u64::MAX.
        self.state = (self.state % LCG_MODULUS * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        Some(self.state)
    }
}

/// Counts primes `<= limit` with a flag array of length `limit + 1`.
pub fn sieve(limit: usize) -> u64 {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }

    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            let mut j = i * i;
            while j <= limit {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    is_prime.iter().filter(|&&p| p).count() as u64
}

/// Ascending in-place bubble sort, always running the full `n^2 / 2` passes.
pub fn bubble_sort(values: &mut [u64]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
}

/// Generates `size` LCG values, sorts them, and returns their sum.
pub fn bubble_sort_checksum(size: usize, seed: u64) -> u64 {
    let mut values: Vec<u64> = Lcg::new(seed).take(size).collect();
    bubble_sort(&mut values);
    values.iter().sum()
}
