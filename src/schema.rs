use crate::kernels::Kernel;
use crate::runner::SuiteOutcome;
use crate::SuiteVariant;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub suite: SuiteVariant,
    pub timestamp_utc: String,
    pub git_sha: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasurementRecord {
    pub position: usize,
    pub label: String,
    pub params: Kernel,
    pub result: i64,
    pub expected: i64,
    pub elapsed_ns: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub run: RunMeta,
    pub measurements: Vec<MeasurementRecord>,
    pub total_ns: u64,
}

impl SuiteReport {
    pub fn from_outcome(
        outcome: &SuiteOutcome,
        timestamp_utc: String,
        git_sha: Option<String>,
    ) -> Self {
        let measurements = outcome
            .variant
            .specs()
            .iter()
            .zip(&outcome.measurements)
            .enumerate()
            .map(|(idx, (spec, m))| MeasurementRecord {
                position: idx + 1,
                label: m.label.to_string(),
                params: spec.kernel,
                result: m.result,
                expected: spec.expected,
                elapsed_ns: m.elapsed.as_nanos() as u64,
            })
            .collect();

        Self {
            run: RunMeta {
                schema_version: SCHEMA_VERSION,
                bench_version: env!("CARGO_PKG_VERSION").to_string(),
                suite: outcome.variant,
                timestamp_utc,
                git_sha,
            },
            measurements,
            total_ns: outcome.total.as_nanos() as u64,
        }
    }

    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
