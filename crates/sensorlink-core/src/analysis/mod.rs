use std::path::Path;

use thiserror::Error;

use crate::codec::uplink::decode_uplink;
use crate::console::{AtLogSource, SourceError, UplinkEvent, UplinkSource};
use crate::{FailureRecord, ReadingRecord, Report, UplinkSummary, make_stub_report};

mod headers;
mod ranges;

use headers::HeaderStats;
use ranges::RangeStats;

/// FPort assumed for uplinks whose port is not recorded in the log.
pub const DEFAULT_PORT: u8 = 1;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// FPort passed to the decoder for every uplink.
    pub port: u8,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

pub fn analyze_log_file(path: &Path, options: &AnalyzeOptions) -> Result<Report, AnalysisError> {
    let source = AtLogSource::open(path)?;
    let bytes = path.metadata()?.len();
    analyze_source(&path.display().to_string(), bytes, source, options)
}

pub fn analyze_source<S: UplinkSource>(
    input_path: &str,
    input_bytes: u64,
    mut source: S,
    options: &AnalyzeOptions,
) -> Result<Report, AnalysisError> {
    let mut readings = Vec::new();
    let mut failures = Vec::new();
    let mut voltage = RangeStats::default();
    let mut temperature = RangeStats::default();
    let mut headers = HeaderStats::default();

    while let Some(UplinkEvent {
        line,
        payload_hex,
        payload,
    }) = source.next_uplink()?
    {
        let decoded = payload
            .map_err(|err| err.to_string())
            .and_then(|bytes| {
                decode_uplink(&bytes, options.port)
                    .map(|reading| (bytes, reading))
                    .map_err(|err| err.to_string())
            });

        match decoded {
            Ok((bytes, reading)) => {
                voltage.add(reading.voltage);
                temperature.add(reading.temperature);
                headers.add(reading.header);
                readings.push(ReadingRecord {
                    line,
                    port: options.port,
                    payload_hex: hex::encode(&bytes),
                    header_kind: reading.header_kind().as_str().to_string(),
                    reading,
                });
            }
            Err(error) => {
                log::debug!("line {line}: uplink {payload_hex:?} not decoded: {error}");
                failures.push(FailureRecord {
                    line,
                    payload_hex,
                    error,
                });
            }
        }
    }

    let mut report = make_stub_report(input_path, input_bytes);
    report.summary = UplinkSummary {
        lines_total: source.lines_read(),
        uplinks_total: (readings.len() + failures.len()) as u64,
        decoded: readings.len() as u64,
        failed: failures.len() as u64,
    };
    report.voltage = voltage.summary();
    report.temperature = temperature.summary();
    report.headers = headers.build_header_counts();
    report.readings = readings;
    report.failures = failures;

    if report.summary.failed > 0 {
        log::warn!(
            "{}: {} of {} uplinks failed to decode",
            input_path,
            report.summary.failed,
            report.summary.uplinks_total
        );
    }
    log::debug!(
        "analysed {}: {} lines, {} uplinks, {} failed",
        input_path,
        report.summary.lines_total,
        report.summary.uplinks_total,
        report.summary.failed
    );
    Ok(report)
}
