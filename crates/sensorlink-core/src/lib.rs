//! sensorlink core library for sensor uplink payloads.
//!
//! The centre of this crate is [`decode`]: it turns the raw bytes a sensor
//! node transmits into a [`DecodedReading`] with a header byte, a supply
//! voltage and a temperature. Decoding is byte-oriented, synchronous and side
//! effect free; the read cursor is local to each call, so the function is
//! re-entrant and safe to call from many threads at once.
//!
//! Around the decoder sits an offline pipeline used by the CLI: the `console`
//! source extracts transmitted payloads from a device AT-console log, and the
//! analysis layer decodes each one and aggregates the results into a
//! deterministic [`Report`].
//!
//! Invariants:
//! - Field order is fixed: header, voltage, temperature.
//! - Sentinels (`0xFF` voltage, `0x7FFF` temperature) decode to `None`.
//! - A payload too short for any field yields an error, never a partial reading.
//! - Report outputs are deterministic and follow log order.
//!
//! # Examples
//! ```
//! use sensorlink_core::decode;
//!
//! let reading = decode(&[0x01, 0xff, 0x7f, 0xff], 1)?;
//! assert_eq!(reading.header, 1);
//! assert_eq!(reading.voltage, None);
//! assert_eq!(reading.temperature, None);
//! # Ok::<(), sensorlink_core::DecodeError>(())
//! ```
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sensorlink_core::{AnalyzeOptions, analyze_log_file};
//!
//! let report = analyze_log_file(Path::new("device.log"), &AnalyzeOptions::default())?;
//! println!("decoded {} uplinks", report.summary.decoded);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
mod codec;
mod console;

pub use analysis::{AnalysisError, AnalyzeOptions, DEFAULT_PORT, analyze_log_file, analyze_source};
pub use codec::uplink::error::DecodeError;
pub use codec::uplink::layout::PAYLOAD_LEN;
pub use codec::uplink::reader::ByteCursor;
pub use codec::uplink::{DecodedReading, HeaderKind};
pub use console::{AtLogSource, HexError, SourceError, UplinkEvent, UplinkSource, parse_hex_payload};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Decode one uplink payload into a reading.
///
/// `port` is accepted for compatibility with network-server codec calling
/// conventions and does not affect the result.
///
/// # Errors
/// Returns [`DecodeError::OutOfRange`] when the payload is shorter than
/// [`PAYLOAD_LEN`] bytes.
pub fn decode(payload: &[u8], port: u8) -> Result<DecodedReading, DecodeError> {
    codec::uplink::decode_uplink(payload, port)
}

/// Aggregated log analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Input log metadata.
    pub input: InputInfo,
    /// Line and uplink counters.
    pub summary: UplinkSummary,
    /// Decoded uplinks in log order.
    pub readings: Vec<ReadingRecord>,
    /// Uplinks that could not be decoded, in log order.
    pub failures: Vec<FailureRecord>,
    /// Voltage range over readings that carried a voltage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<RangeSummary>,
    /// Temperature range over readings that carried a temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<RangeSummary>,
    /// Uplink counts per header value, ascending.
    pub headers: Vec<HeaderCount>,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use sensorlink_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "sensorlink".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "sensorlink");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UplinkSummary {
    /// Lines read from the log, including non-uplink lines.
    pub lines_total: u64,
    /// `$SEND:` lines found.
    pub uplinks_total: u64,
    pub decoded: u64,
    pub failed: u64,
}

/// One decoded uplink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// 1-based log line.
    pub line: u64,
    /// FPort the payload was decoded with.
    pub port: u8,
    /// Payload bytes as lowercase hex.
    pub payload_hex: String,
    /// Header classification (`boot`, `update`, `button_click`, `button_hold`, `unknown`).
    pub header_kind: String,
    pub reading: DecodedReading,
}

/// One uplink that failed to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    pub line: u64,
    /// Payload text as logged.
    pub payload_hex: String,
    /// Human-readable decode or hex error.
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSummary {
    pub min: f64,
    pub max: f64,
    /// Number of non-null values observed.
    pub samples: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderCount {
    pub header: u8,
    pub kind: String,
    pub count: u64,
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use sensorlink_core::make_stub_report;
///
/// let report = make_stub_report("device.log", 123);
/// assert_eq!(report.report_version, sensorlink_core::REPORT_VERSION);
/// assert!(report.readings.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "sensorlink".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        summary: UplinkSummary::default(),
        readings: vec![],
        failures: vec![],
        voltage: None,
        temperature: None,
        headers: vec![],
    }
}
