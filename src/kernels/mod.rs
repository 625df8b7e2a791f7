//! Pure benchmark kernels.
//!
//! Every kernel maps its parameters to one deterministic integer. Results are
//! the comparability contract between runtimes and must match bit for bit.

pub mod iteration;
pub mod memory;
pub mod recursion;
pub mod sorting;
pub mod text;

use serde::Serialize;
use std::hint::black_box;

/// A kernel together with its fixed parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kernel", rename_all = "snake_case")]
pub enum Kernel {
    Fibonacci { n: u32 },
    Factorial { n: u64 },
    Ackermann { m: u64, n: u64 },
    Takeuchi { x: i64, y: i64, z: i64 },
    LoopSum { iterations: u64 },
    NestedLoop { size: u64 },
    Sieve { limit: usize },
    BubbleSort { size: usize, seed: u64 },
    StringConcat { iterations: usize },
    StringAlloc { iterations: usize },
    ArrayMemory { size: usize },
    RecordBuild { size: usize },
}

impl Kernel {
    /// Runs the kernel once. Parameters go through `black_box` so the call
    /// cannot be evaluated at compile time.
    pub fn run(&self) -> i64 {
        match *self {
            Kernel::Fibonacci { n } => recursion::fibonacci(black_box(n)) as i64,
            Kernel::Factorial { n } => recursion::factorial(black_box(n)) as i64,
            Kernel::Ackermann { m, n } => recursion::ackermann(black_box(m), black_box(n)) as i64,
            Kernel::Takeuchi { x, y, z } => {
                recursion::tak(black_box(x), black_box(y), black_box(z))
            }
            Kernel::LoopSum { iterations } => iteration::loop_sum(black_box(iterations)) as i64,
            Kernel::NestedLoop { size } => iteration::nested_loop(black_box(size)) as i64,
            Kernel::Sieve { limit } => sorting::sieve(black_box(limit)) as i64,
            Kernel::BubbleSort { size, seed } => {
                sorting::bubble_sort_checksum(black_box(size), black_box(seed)) as i64
            }
            Kernel::StringConcat { iterations } => text::string_concat(black_box(iterations)) as i64,
            Kernel::StringAlloc { iterations } => text::string_alloc(black_box(iterations)) as i64,
            Kernel::ArrayMemory { size } => memory::array_memory(black_box(size)) as i64,
            Kernel::RecordBuild { size } => memory::record_build(black_box(size)) as i64,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Fibonacci { .. } => "fibonacci",
            Kernel::Factorial { .. } => "factorial",
            Kernel::Ackermann { .. } => "ackermann",
            Kernel::Takeuchi { .. } => "takeuchi",
            Kernel::LoopSum { .. } => "loop_sum",
            Kernel::NestedLoop { .. } => "nested_loop",
            Kernel::Sieve { .. } => "sieve",
            Kernel::BubbleSort { .. } => "bubble_sort",
            Kernel::StringConcat { .. } => "string_concat",
            Kernel::StringAlloc { .. } => "string_alloc",
            Kernel::ArrayMemory { .. } => "array_memory",
            Kernel::RecordBuild { .. } => "record_build",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_inputs_return_identity() {
        let zero = [
            Kernel::LoopSum { iterations: 0 },
            Kernel::NestedLoop { size: 0 },
            Kernel::Sieve { limit: 0 },
            Kernel::BubbleSort { size: 0, seed: sorting::LCG_SEED },
            Kernel::StringConcat { iterations: 0 },
            Kernel::StringAlloc { iterations: 0 },
            Kernel::ArrayMemory { size: 0 },
            Kernel::RecordBuild { size: 0 },
        ];
        for kernel in zero {
            assert_eq!(kernel.run(), 0, "{}", kernel.name());
        }

        assert_eq!(Kernel::Fibonacci { n: 0 }.run(), 0);
        assert_eq!(Kernel::Factorial { n: 0 }.run(), 1);
        assert_eq!(Kernel::Ackermann { m: 0, n: 0 }.run(), 1);
    }

    #[test]
    fn test_repeated_runs_agree() {
        let kernel = Kernel::BubbleSort {
            size: 100,
            seed: sorting::LCG_SEED,
        };
        assert_eq!(kernel.run(), kernel.run());
    }

    #[test]
    fn test_serializes_with_parameters() {
        let json = serde_json::to_value(Kernel::Ackermann { m: 3, n: 8 }).unwrap();
        assert_eq!(json["kernel"], "ackermann");
        assert_eq!(json["m"], 3);
        assert_eq!(json["n"], 8);
    }
}
