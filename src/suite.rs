//! Suite tables.
//!
//! Each variant's entries and parameters are fixed at build time and define
//! report order. The basic and extended variants differ in membership and in
//! the string concatenation step count; they are never mixed.

use crate::kernels::sorting::LCG_SEED;
use crate::kernels::Kernel;
use crate::SuiteVariant;

/// One suite entry: display label, kernel with its parameters, reference result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkSpec {
    pub label: &'static str,
    pub kernel: Kernel,
    pub expected: i64,
}

pub const FIBONACCI: BenchmarkSpec = BenchmarkSpec {
    label: "Fibonacci(30)",
    kernel: Kernel::Fibonacci { n: 30 },
    expected: 832_040,
};

pub const FACTORIAL: BenchmarkSpec = BenchmarkSpec {
    label: "Factorial(20)",
    kernel: Kernel::Factorial { n: 20 },
    expected: 2_432_902_008_176_640_000,
};

pub const ACKERMANN: BenchmarkSpec = BenchmarkSpec {
    label: "Ackermann(3, 8)",
    kernel: Kernel::Ackermann { m: 3, n: 8 },
    expected: 2_045,
};

pub const TAKEUCHI: BenchmarkSpec = BenchmarkSpec {
    label: "Tak(18, 12, 6)",
    kernel: Kernel::Takeuchi { x: 18, y: 12, z: 6 },
    expected: 7,
};

pub const LOOP_SUM: BenchmarkSpec = BenchmarkSpec {
    label: "Loop 1.000.000 iterasyon",
    kernel: Kernel::LoopSum {
        iterations: 1_000_000,
    },
    expected: 499_999_500_000,
};

pub const NESTED_LOOP: BenchmarkSpec = BenchmarkSpec {
    label: "Nested Loop 1000x1000",
    kernel: Kernel::NestedLoop { size: 1_000 },
    expected: 1_000_000,
};

pub const SIEVE: BenchmarkSpec = BenchmarkSpec {
    label: "Sieve of Eratosthenes 10000",
    kernel: Kernel::Sieve { limit: 10_000 },
    expected: 1_229,
};

pub const BUBBLE_SORT: BenchmarkSpec = BenchmarkSpec {
    label: "Bubble Sort 100",
    kernel: Kernel::BubbleSort {
        size: 100,
        seed: LCG_SEED,
    },
    expected: 1_585_678,
};

pub const STRING_CONCAT_BASIC: BenchmarkSpec = BenchmarkSpec {
    label: "String concatenation 100000",
    kernel: Kernel::StringConcat {
        iterations: 100_000,
    },
    expected: 100_000,
};

pub const STRING_CONCAT: BenchmarkSpec = BenchmarkSpec {
    label: "String concatenation 1000",
    kernel: Kernel::StringConcat { iterations: 1_000 },
    expected: 1_000,
};

pub const STRING_ALLOC: BenchmarkSpec = BenchmarkSpec {
    label: "String allocation 1000",
    kernel: Kernel::StringAlloc { iterations: 1_000 },
    expected: 14_000,
};

pub const ARRAY_MEMORY: BenchmarkSpec = BenchmarkSpec {
    label: "Array memory 10000",
    kernel: Kernel::ArrayMemory { size: 10_000 },
    expected: 49_995_000,
};

pub const RECORD_BUILD: BenchmarkSpec = BenchmarkSpec {
    label: "Structured records 1000",
    kernel: Kernel::RecordBuild { size: 1_000 },
    expected: 4_995_000,
};

pub const BASIC: &[BenchmarkSpec] = &[
    FIBONACCI,
    FACTORIAL,
    LOOP_SUM,
    NESTED_LOOP,
    STRING_CONCAT_BASIC,
];

pub const EXTENDED: &[BenchmarkSpec] = &[
    FIBONACCI,
    FACTORIAL,
    ACKERMANN,
    LOOP_SUM,
    NESTED_LOOP,
    SIEVE,
    BUBBLE_SORT,
    STRING_CONCAT,
    STRING_ALLOC,
    ARRAY_MEMORY,
    RECORD_BUILD,
];

pub const FULL: &[BenchmarkSpec] = &[
    FIBONACCI,
    FACTORIAL,
    ACKERMANN,
    TAKEUCHI,
    LOOP_SUM,
    NESTED_LOOP,
    SIEVE,
    BUBBLE_SORT,
    STRING_CONCAT,
    STRING_ALLOC,
    ARRAY_MEMORY,
    RECORD_BUILD,
];

impl SuiteVariant {
    pub fn specs(&self) -> &'static [BenchmarkSpec] {
        match self {
            SuiteVariant::Basic => BASIC,
            SuiteVariant::Extended => EXTENDED,
            SuiteVariant::Full => FULL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::sorting::Lcg;

    #[test]
    fn test_suite_sizes() {
        assert_eq!(SuiteVariant::Basic.specs().len(), 5);
        assert_eq!(SuiteVariant::Extended.specs().len(), 11);
        assert_eq!(SuiteVariant::Full.specs().len(), 12);
    }

    #[test]
    fn test_every_kernel_matches_reference() {
        for spec in FULL.iter().chain(BASIC) {
            assert_eq!(spec.kernel.run(), spec.expected, "{}", spec.label);
        }
    }

    #[test]
    fn test_variants_differ_only_in_concat_iterations() {
        let concat = |specs: &[BenchmarkSpec]| {
            specs
                .iter()
                .find_map(|s| match s.kernel {
                    Kernel::StringConcat { iterations } => Some(iterations),
                    _ => None,
                })
        };
        assert_eq!(concat(BASIC), Some(100_000));
        assert_eq!(concat(EXTENDED), Some(1_000));

        for spec in BASIC {
            if !matches!(spec.kernel, Kernel::StringConcat { .. }) {
                assert!(EXTENDED.contains(spec), "{}", spec.label);
            }
        }
    }

    #[test]
    fn test_full_is_extended_plus_takeuchi() {
        let without_tak: Vec<BenchmarkSpec> =
            FULL.iter().copied().filter(|s| *s != TAKEUCHI).collect();
        assert_eq!(without_tak, EXTENDED);
    }

    #[test]
    fn test_bubble_reference_is_unsorted_sum() {
        let unsorted: u64 = Lcg::new(LCG_SEED).take(100).sum();
        assert_eq!(BUBBLE_SORT.expected, unsorted as i64);
    }
}
