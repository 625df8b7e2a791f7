use clap::{Parser, Subcommand};
use runtime_parity_bench::compare;
use runtime_parity_bench::harness::MonotonicClock;
use runtime_parity_bench::runner::{Runner, SuiteOutcome};
use runtime_parity_bench::schema::SuiteReport;
use runtime_parity_bench::SuiteVariant;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a suite and print the text report (the default when no subcommand is given).
    Run,

    /// Rank saved text reports from different runtimes by total time.
    ///
    /// The runtime name is taken from each file's stem, e.g. `c.txt` -> `c`.
    Compare {
        #[arg(value_name = "FILE", num_args = 1.., required = true)]
        reports: Vec<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "runtime-parity-bench")]
#[command(about = "Fixed-parameter CPU microbenchmark suite (text report on stdout)")]
struct Args {
    #[arg(long, value_enum, default_value_t = SuiteVariant::Extended, global = true)]
    suite: SuiteVariant,

    /// Fail if any kernel result differs from its reference value.
    #[arg(long, default_value_t = false, global = true)]
    verify: bool,

    /// Also write a JSON report of the run to this file.
    #[arg(long, value_name = "FILE", global = true)]
    json: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

/// Seconds since the Unix epoch as `unix:<secs>`; avoids pulling in a date crate.
fn now_unix_stamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn git_sha_short() -> Option<String> {
    std::env::var("GIT_SHA")
        .ok()
        .or_else(|| std::env::var("GITHUB_SHA").ok())
        .map(|s| s.chars().take(12).collect())
}

fn run_suite(args: &Args) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = Runner::new(args.suite, MonotonicClock::new()).run(&mut out)?;
    drop(out);

    if let Some(path) = &args.json {
        write_json(path, &outcome)?;
    }

    if args.verify {
        let mismatches = outcome.mismatches();
        for m in &mismatches {
            error!(label = m.label, expected = m.expected, actual = m.actual, "result mismatch");
        }
        if !mismatches.is_empty() {
            return Err(io::Error::other(format!(
                "{} of {} kernel results differ from reference values",
                mismatches.len(),
                outcome.measurements.len()
            )));
        }
        info!(kernels = outcome.measurements.len(), "all results verified");
    }

    Ok(())
}

fn write_json(path: &Path, outcome: &SuiteOutcome) -> io::Result<()> {
    let report = SuiteReport::from_outcome(outcome, now_unix_stamp(), git_sha_short());
    report.write_json(path)?;
    info!(path = %path.display(), "wrote JSON report");
    Ok(())
}

fn run_compare(paths: &[PathBuf]) -> io::Result<()> {
    let reports = paths
        .iter()
        .map(|p| compare::load_report(p))
        .collect::<io::Result<Vec<_>>>()?;
    info!(runtimes = reports.len(), "loaded reports");

    for d in compare::result_disagreements(&reports) {
        warn!(label = %d.label, results = ?d.results, "runtimes computed different results");
    }
    let table = compare::render_comparison(&reports)?;

    let mut out = io::stdout().lock();
    out.write_all(table.as_bytes())?;
    out.flush()
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match &args.cmd {
        None | Some(Command::Run) => run_suite(&args),
        Some(Command::Compare { reports }) => run_compare(reports),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_stamp_format() {
        let stamp = now_unix_stamp();
        let secs: u64 = stamp
            .strip_prefix("unix:")
            .and_then(|s| s.parse().ok())
            .unwrap();
        assert!(secs > 1_600_000_000);
    }
}
