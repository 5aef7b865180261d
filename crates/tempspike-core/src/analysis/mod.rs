use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::registry::{Registry, default_registry};
use crate::source::{CaptureEvent, CaptureSource, CodesFileSource, SourceError};
use crate::{CaptureSummary, DEFAULT_GENERATED_AT, Report, make_stub_report};

mod rejects;

use rejects::{RejectStats, add_reject, build_reject_summaries};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Decode every capture in a codes file with the default registry.
pub fn decode_codes_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = CodesFileSource::open(path)?;
    let registry = default_registry();
    decode_source(path, source, &registry)
}

/// Drive a capture source through the registered decoders and build a
/// deterministic report: readings in input order, rejects aggregated
/// per error kind.
pub fn decode_source<S: CaptureSource>(
    path: &Path,
    mut source: S,
    registry: &Registry,
) -> Result<Report, AnalysisError> {
    let mut captures_total = 0u64;
    let mut first_ts = None;
    let mut last_ts = None;
    let mut readings = Vec::new();
    let mut reject_stats: HashMap<&'static str, RejectStats> = HashMap::new();

    while let Some(CaptureEvent { ts, line, capture }) = source.next_capture()? {
        captures_total += 1;
        update_ts_bounds(&mut first_ts, &mut last_ts, ts);
        for entry in registry.entries() {
            match (entry.decode)(&capture) {
                Ok(reading) => {
                    readings.push(reading);
                    break;
                }
                Err(err) => add_reject(&mut reject_stats, &err, line),
            }
        }
    }

    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());
    report.capture_summary = Some(CaptureSummary {
        captures_total,
        time_start: ts_to_rfc3339(first_ts),
        time_end: ts_to_rfc3339(last_ts),
    });
    report.generated_at = report
        .capture_summary
        .as_ref()
        .and_then(|summary| summary.time_end.clone().or(summary.time_start.clone()))
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());
    report.readings = readings;
    report.rejects = build_reject_summaries(reject_stats);
    Ok(report)
}

fn update_ts_bounds(first: &mut Option<f64>, last: &mut Option<f64>, ts: Option<f64>) {
    let ts = match ts {
        Some(ts) => ts,
        None => return,
    };
    match first {
        None => *first = Some(ts),
        Some(existing) => {
            if ts < *existing {
                *first = Some(ts);
            }
        }
    }
    match last {
        None => *last = Some(ts),
        Some(existing) => {
            if ts > *existing {
                *last = Some(ts);
            }
        }
    }
}

fn ts_to_rfc3339(ts: Option<f64>) -> Option<String> {
    let ts = ts?;
    let secs = ts.trunc() as i128;
    let nanos = ((ts - ts.trunc()) * 1e9).round() as i128;
    OffsetDateTime::from_unix_timestamp_nanos(secs * 1_000_000_000 + nanos)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}
