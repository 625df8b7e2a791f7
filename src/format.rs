//! Text report lines.
//!
//! The line templates are shared by every runtime's implementation of the
//! suite, so reports can be diffed and parsed across languages. Durations are
//! converted to display units only here.

use std::fmt::Display;
use std::time::Duration;

const RULE_WIDTH: usize = 55;
const TITLE: &str = "RUST PERFORMANS BENCHMARK";

/// Display unit picked for a per-kernel duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Micros,
    Millis,
}

impl TimeUnit {
    /// Microseconds below one millisecond, milliseconds otherwise.
    pub fn for_duration(elapsed: Duration) -> Self {
        if elapsed < Duration::from_millis(1) {
            TimeUnit::Micros
        } else {
            TimeUnit::Millis
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
        }
    }
}

pub fn as_millis_f64(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}

pub fn as_micros_f64(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000.0
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn opening_banner() -> String {
    let pad = (RULE_WIDTH - TITLE.len()) / 2;
    format!("{rule}\n{:pad$}{TITLE}\n{rule}\n\n", "", rule = rule())
}

pub fn header(position: usize, label: &str) -> String {
    format!("Test {position}: {label}\n")
}

pub fn result_line(result: impl Display) -> String {
    format!("  Sonuc: {result}\n")
}

pub fn duration_line(elapsed: Duration) -> String {
    match TimeUnit::for_duration(elapsed) {
        TimeUnit::Micros => format!("  Sure: {:.2} us\n", as_micros_f64(elapsed)),
        TimeUnit::Millis => format!("  Sure: {:.3} ms\n", as_millis_f64(elapsed)),
    }
}

/// Grand total, always in milliseconds.
pub fn total_line(total: Duration) -> String {
    format!("TOPLAM SURE: {:.3} ms\n", as_millis_f64(total))
}

pub fn closing_banner(total: Duration) -> String {
    format!("{rule}\n{}{rule}\n", total_line(total), rule = rule())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_boundary_at_one_millisecond() {
        assert_eq!(TimeUnit::for_duration(Duration::ZERO), TimeUnit::Micros);
        assert_eq!(
            TimeUnit::for_duration(Duration::from_nanos(999_999)),
            TimeUnit::Micros
        );
        assert_eq!(
            TimeUnit::for_duration(Duration::from_millis(1)),
            TimeUnit::Millis
        );
    }

    #[test]
    fn test_duration_line_micros() {
        assert_eq!(
            duration_line(Duration::from_nanos(12_346)),
            "  Sure: 12.35 us\n"
        );
        assert_eq!(duration_line(Duration::ZERO), "  Sure: 0.00 us\n");
    }

    #[test]
    fn test_duration_line_millis() {
        assert_eq!(
            duration_line(Duration::from_nanos(4_567_890)),
            "  Sure: 4.568 ms\n"
        );
        assert_eq!(
            duration_line(Duration::from_millis(1)),
            "  Sure: 1.000 ms\n"
        );
    }

    #[test]
    fn test_total_line_ignores_magnitude() {
        assert_eq!(
            total_line(Duration::from_nanos(250_000)),
            "TOPLAM SURE: 0.250 ms\n"
        );
        assert_eq!(
            total_line(Duration::from_secs(2)),
            "TOPLAM SURE: 2000.000 ms\n"
        );
    }

    #[test]
    fn test_header_and_result() {
        assert_eq!(header(1, "Fibonacci(30)"), "Test 1: Fibonacci(30)\n");
        assert_eq!(result_line(832_040), "  Sonuc: 832040\n");
    }

    #[test]
    fn test_banners() {
        let open = opening_banner();
        let lines: Vec<&str> = open.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].len(), RULE_WIDTH);
        assert_eq!(lines[1].trim(), TITLE);
        assert!(lines[3].is_empty());

        let close = closing_banner(Duration::from_millis(3));
        assert_eq!(close.lines().nth(1), Some("TOPLAM SURE: 3.000 ms"));
        assert_eq!(close.lines().count(), 3);
    }
}
