use crate::format;
use crate::harness::{time_once, Clock};
use crate::suite::BenchmarkSpec;
use crate::SuiteVariant;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info};

/// Result and elapsed time of one kernel invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub label: &'static str,
    pub result: i64,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub label: &'static str,
    pub expected: i64,
    pub actual: i64,
}

/// A completed suite run.
#[derive(Clone, Debug)]
pub struct SuiteOutcome {
    pub variant: SuiteVariant,
    pub measurements: Vec<Measurement>,
    pub total: Duration,
}

impl SuiteOutcome {
    /// Measurements whose result differs from the suite's reference value.
    pub fn mismatches(&self) -> Vec<Mismatch> {
        self.variant
            .specs()
            .iter()
            .zip(&self.measurements)
            .filter(|(spec, m)| spec.expected != m.result)
            .map(|(spec, m)| Mismatch {
                label: spec.label,
                expected: spec.expected,
                actual: m.result,
            })
            .collect()
    }
}

/// Runs one suite variant, one kernel at a time, in table order.
///
/// `run` consumes the runner: a suite is executed exactly once and the
/// returned [`SuiteOutcome`] is its only trace.
pub struct Runner<C: Clock> {
    variant: SuiteVariant,
    clock: C,
}

impl<C: Clock> Runner<C> {
    pub fn new(variant: SuiteVariant, clock: C) -> Self {
        Self { variant, clock }
    }

    pub fn run<W: Write>(self, out: &mut W) -> io::Result<SuiteOutcome> {
        let specs = self.variant.specs();
        info!(suite = self.variant.as_str(), kernels = specs.len(), "starting suite");

        out.write_all(format::opening_banner().as_bytes())?;

        let mut measurements = Vec::with_capacity(specs.len());
        let total = specs
            .iter()
            .enumerate()
            .try_fold(Duration::ZERO, |total, (idx, spec)| {
                let m = self.step(idx + 1, spec, &mut *out)?;
                let total = total + m.elapsed;
                measurements.push(m);
                Ok::<_, io::Error>(total)
            })?;

        out.write_all(format::closing_banner(total).as_bytes())?;
        out.flush()?;

        info!(
            suite = self.variant.as_str(),
            total_ms = format::as_millis_f64(total),
            "suite finished"
        );

        Ok(SuiteOutcome {
            variant: self.variant,
            measurements,
            total,
        })
    }

    fn step<W: Write>(
        &self,
        position: usize,
        spec: &BenchmarkSpec,
        out: &mut W,
    ) -> io::Result<Measurement> {
        out.write_all(format::header(position, spec.label).as_bytes())?;

        let timed = time_once(&self.clock, || spec.kernel.run());

        out.write_all(format::result_line(timed.value).as_bytes())?;
        out.write_all(format::duration_line(timed.elapsed).as_bytes())?;
        out.write_all(b"\n")?;

        debug!(
            kernel = spec.kernel.name(),
            result = timed.value,
            elapsed_ns = timed.elapsed.as_nanos() as u64,
            "kernel finished"
        );

        Ok(Measurement {
            label: spec.label,
            result: timed.value,
            elapsed: timed.elapsed,
        })
    }
}
