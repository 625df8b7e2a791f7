//! Cross-runtime comparison of saved text reports.
//!
//! Any runtime that follows the report line templates can be compared: the
//! parser only looks at `Test`, `Sonuc:`, `Sure:` and `TOPLAM SURE:` lines.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedBlock {
    pub label: String,
    pub result: Option<String>,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedReport {
    pub blocks: Vec<ParsedBlock>,
    pub total_ms: f64,
}

/// A parsed report tagged with the runtime that produced it.
#[derive(Clone, Debug)]
pub struct RuntimeReport {
    pub runtime: String,
    pub report: ParsedReport,
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Parses `"<value> <unit>"` into milliseconds.
fn parse_time_ms(s: &str) -> io::Result<f64> {
    let mut parts = s.split_whitespace();
    let (Some(value), Some(unit)) = (parts.next(), parts.next()) else {
        return Err(invalid(format!("malformed duration: {s:?}")));
    };
    let value: f64 = value
        .replace(',', "")
        .parse()
        .map_err(|_| invalid(format!("malformed duration value: {value:?}")))?;

    match unit.to_ascii_lowercase().as_str() {
        "us" | "µs" => Ok(value / 1_000.0),
        "ms" => Ok(value),
        "s" => Ok(value * 1_000.0),
        other => Err(invalid(format!("unknown time unit: {other:?}"))),
    }
}

pub fn parse_report(text: &str) -> io::Result<ParsedReport> {
    let mut blocks = Vec::new();
    let mut total_ms = None;
    let mut label: Option<String> = None;
    let mut result: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("TOPLAM SURE:") {
            total_ms = Some(parse_time_ms(rest)?);
        } else if let Some(rest) = line.strip_prefix("Test ") {
            // "3: Loop ..." -> "Loop ..."
            let name = rest.split_once(": ").map_or(rest, |(_, name)| name);
            label = Some(name.trim().to_string());
            result = None;
        } else if let Some(rest) = line.strip_prefix("Sonuc:") {
            result = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("Sure:") {
            let elapsed_ms = parse_time_ms(rest)?;
            let Some(label) = label.take() else {
                return Err(invalid(format!("timing line without a test header: {line:?}")));
            };
            blocks.push(ParsedBlock {
                label,
                result: result.take(),
                elapsed_ms,
            });
        }
    }

    if blocks.is_empty() {
        return Err(invalid("no benchmark blocks found".to_string()));
    }

    let total_ms = total_ms.unwrap_or_else(|| blocks.iter().map(|b| b.elapsed_ms).sum());
    Ok(ParsedReport { blocks, total_ms })
}

/// Reads and parses one report file; the runtime name is the file stem.
pub fn load_report(path: &Path) -> io::Result<RuntimeReport> {
    let text = fs::read_to_string(path)?;
    let report = parse_report(&text)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
    let runtime = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(RuntimeReport { runtime, report })
}

/// Human-readable duration: microseconds, milliseconds or seconds.
pub fn format_time(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.2} us", ms * 1_000.0)
    } else if ms < 1_000.0 {
        format!("{ms:.3} ms")
    } else {
        format!("{:.3} s", ms / 1_000.0)
    }
}

/// Fails unless every report ran the same benchmarks in the same order.
///
/// Totals from different suite variants are not comparable.
pub fn check_same_suite(reports: &[RuntimeReport]) -> io::Result<()> {
    let Some((first, rest)) = reports.split_first() else {
        return Ok(());
    };
    let labels = |r: &RuntimeReport| -> Vec<String> {
        r.report.blocks.iter().map(|b| b.label.clone()).collect()
    };
    let expected = labels(first);

    for r in rest {
        let got = labels(r);
        if got != expected {
            return Err(invalid(format!(
                "{} ran a different suite than {} ({} vs {} benchmarks, labels {:?} vs {:?})",
                r.runtime,
                first.runtime,
                got.len(),
                expected.len(),
                got,
                expected
            )));
        }
    }
    Ok(())
}

/// A benchmark whose `Sonuc` value is not the same in every report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultDisagreement {
    pub label: String,
    /// `(runtime, result)` for every report that printed one.
    pub results: Vec<(String, String)>,
}

/// Benchmarks where the runtimes computed different results, in report order.
pub fn result_disagreements(reports: &[RuntimeReport]) -> Vec<ResultDisagreement> {
    let Some(first) = reports.first() else {
        return Vec::new();
    };

    first
        .report
        .blocks
        .iter()
        .filter_map(|block| {
            let results: Vec<(String, String)> = reports
                .iter()
                .filter_map(|r| {
                    r.report
                        .blocks
                        .iter()
                        .find(|b| b.label == block.label)
                        .and_then(|b| b.result.clone())
                        .map(|v| (r.runtime.clone(), v))
                })
                .collect();
            let agree = results.windows(2).all(|w| w[0].1 == w[1].1);
            (!agree).then(|| ResultDisagreement {
                label: block.label.clone(),
                results,
            })
        })
        .collect()
}

/// Runtimes with a positive total, fastest first, paired with their slowdown ratio.
pub fn ranking(reports: &[RuntimeReport]) -> Vec<(&RuntimeReport, f64)> {
    let mut ranked: Vec<&RuntimeReport> = reports
        .iter()
        .filter(|r| r.report.total_ms > 0.0)
        .collect();
    ranked.sort_by(|a, b| {
        a.report
            .total_ms
            .partial_cmp(&b.report.total_ms)
            .unwrap_or(Ordering::Equal)
    });

    let Some(fastest) = ranked.first().map(|r| r.report.total_ms) else {
        return Vec::new();
    };
    ranked
        .into_iter()
        .map(|r| (r, r.report.total_ms / fastest))
        .collect()
}

/// Side-by-side timings and a ranking by total. Rows whose results differ
/// between runtimes are marked `results differ`.
pub fn render_comparison(reports: &[RuntimeReport]) -> io::Result<String> {
    check_same_suite(reports)?;

    let mut out = String::new();
    let disagreements = result_disagreements(reports);
    let labels: Vec<&str> = reports
        .first()
        .map(|r| r.report.blocks.iter().map(|b| b.label.as_str()).collect())
        .unwrap_or_default();

    out.push_str(&format!("  {:<28}", "Test"));
    for r in reports {
        out.push_str(&format!(" {:<14}", r.runtime));
    }
    out.push('\n');
    out.push_str(&format!("  {}\n", "-".repeat(28 + 15 * reports.len())));

    for label in &labels {
        out.push_str(&format!("  {label:<28}"));
        for r in reports {
            let cell = r
                .report
                .blocks
                .iter()
                .find(|b| b.label == *label)
                .map_or_else(|| "N/A".to_string(), |b| format_time(b.elapsed_ms));
            out.push_str(&format!(" {cell:<14}"));
        }
        if disagreements.iter().any(|d| d.label == *label) {
            out.push_str(" results differ");
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str(&format!("  {:<6} {:<15} {:<14} {}\n", "Rank", "Runtime", "Total", "Relative"));
    out.push_str(&format!("  {}\n", "-".repeat(50)));
    for (idx, (r, ratio)) in ranking(reports).into_iter().enumerate() {
        let relative = if idx == 0 {
            "fastest".to_string()
        } else {
            format!("{ratio:.2}x slower")
        };
        out.push_str(&format!(
            "  {:<6} {:<15} {:<14} {}\n",
            idx + 1,
            r.runtime,
            format_time(r.report.total_ms),
            relative
        ));
    }

    Ok(out)
}
