use std::hint::black_box;

// Accumulators pass through `black_box` on every step so the loops cannot be
// folded into a closed form.

/// Sum of `0..iterations`.
pub fn loop_sum(iterations: u64) -> u64 {
    let mut sum = 0u64;
    for i in 0..iterations {
        sum = black_box(sum + i);
    }
    sum
}

/// Counts the inner iterations of a `size x size` double loop.
pub fn nested_loop(size: u64) -> u64 {
    let mut count = 0u64;
    for _ in 0..size {
        for _ in 0..size {
            count = black_box(count + 1);
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_sum_matches_gauss() {
        for n in [0u64, 1, 2, 10, 1_000, 1_000_000] {
            assert_eq!(loop_sum(n), n * n.saturating_sub(1) / 2, "n={n}");
        }
    }

    #[test]
    fn test_nested_loop_is_square() {
        assert_eq!(nested_loop(0), 0);
        assert_eq!(nested_loop(1), 1);
        assert_eq!(nested_loop(37), 37 * 37);
        assert_eq!(nested_loop(1_000), 1_000_000);
    }
}
