//! TempSpike core library for decoding wireless thermometer captures.
//!
//! This crate implements the offline decode pipeline used by the CLI:
//! capture sources feed the decode driver, which offers each capture to
//! the registered device decoders (layout/reader/parser) and aggregates
//! results into a deterministic report. Decoding is bit-oriented and
//! side-effect free; all I/O is isolated in `source` modules. Bit
//! positions and framing constants are captured in each device's
//! `layout` so parsers stay minimal.
//!
//! Invariants:
//! - Report outputs are deterministic and stable across runs.
//! - Decoders are pure: one capture in, one validated reading or a
//!   non-fatal error out, with no cross-call state.
//! - Optional reading fields are omitted, never reported as zero.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use tempspike_core::decode_codes_file;
//!
//! let report = decode_codes_file(Path::new("capture.codes"))?;
//! println!("readings: {}", report.readings.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
mod bitbuf;
mod protocols;
mod registry;
mod source;

pub use analysis::{AnalysisError, decode_codes_file, decode_source};
pub use bitbuf::{BitCapture, BitRow};
pub use protocols::tempspike::{DecodeError, decode_tempspike};
pub use registry::{
    DecodeFn, DeviceDescriptor, DeviceEntry, Modulation, Registry, default_registry,
};
pub use source::{CaptureEvent, CaptureSource, CodesFileSource, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no capture time is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Aggregated decode report with deterministic ordering.
///
/// # Examples
/// ```
/// use tempspike_core::make_stub_report;
///
/// let report = make_stub_report("capture.codes", 123);
/// assert_eq!(report.report_version, tempspike_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,

    /// Input capture metadata.
    pub input: InputInfo,

    /// Optional capture summary (may be absent when unavailable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_summary: Option<CaptureSummary>,
    /// Successfully decoded readings in input order.
    pub readings: Vec<ThermometerReading>,
    /// Rejected captures aggregated per error kind, in stable order.
    pub rejects: Vec<RejectSummary>,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use tempspike_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "tempspike".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "tempspike");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "tempspike").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input capture metadata embedded in reports.
///
/// # Examples
/// ```
/// use tempspike_core::InputInfo;
///
/// let input = InputInfo {
///     path: "capture.codes".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Basic capture summary (timestamps may be absent).
///
/// # Examples
/// ```
/// use tempspike_core::CaptureSummary;
///
/// let summary = CaptureSummary {
///     captures_total: 10,
///     time_start: None,
///     time_end: None,
/// };
/// assert_eq!(summary.captures_total, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSummary {
    /// Total capture count observed in the input.
    pub captures_total: u64,
    /// RFC3339 timestamp of the first capture (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    /// RFC3339 timestamp of the last capture (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
}

/// One validated thermometer transmission.
///
/// A transmission originates from either the probe or the booster base,
/// so the absent role's battery field is omitted rather than reported
/// as a false zero.
///
/// # Examples
/// ```
/// use tempspike_core::ThermometerReading;
///
/// let reading = ThermometerReading {
///     model: "ThermoPro-TempSpikeXR".to_string(),
///     id: "9c".to_string(),
///     color: "white".to_string(),
///     is_docked: None,
///     temperature_int_c: 20.0,
///     temperature_amb_c: 20.9,
///     is_probe: Some(1),
///     is_booster: None,
///     probe_battery: Some(1),
///     booster_battery: None,
///     mic: "CRC".to_string(),
/// };
/// assert_eq!(reading.id, "9c");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermometerReading {
    /// Model string constant.
    pub model: String,
    /// Device identifier, 2-digit lowercase hex.
    pub id: String,
    /// Housing color: "white" or "black".
    pub color: String,
    /// Present (as 1) only when the probe sits in its dock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_docked: Option<u8>,
    /// Internal temperature in Celsius, one decimal of precision.
    #[serde(rename = "temperature_int_C")]
    pub temperature_int_c: f64,
    /// Ambient temperature in Celsius, one decimal of precision.
    #[serde(rename = "temperature_amb_C")]
    pub temperature_amb_c: f64,
    /// Present (as 1) only when the probe is transmitting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_probe: Option<u8>,
    /// Present (as 1) only when the booster base is transmitting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_booster: Option<u8>,
    /// Probe battery bars (0-3); the field spelling matches the
    /// device's established output schema.
    #[serde(rename = "probe_batery", skip_serializing_if = "Option::is_none")]
    pub probe_battery: Option<u8>,
    /// Booster battery bars (0-3).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_battery: Option<u8>,
    /// Integrity check that validated the frame.
    pub mic: String,
}

/// Rejected-capture aggregate for one decode error kind.
///
/// # Examples
/// ```
/// use tempspike_core::RejectSummary;
///
/// let reject = RejectSummary {
///     reason: "sync_not_found".to_string(),
///     count: 2,
///     examples: vec!["line 4: sync word not found".to_string()],
/// };
/// assert_eq!(reject.count, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectSummary {
    /// Stable error kind label (e.g., `checksum_mismatch`).
    pub reason: String,
    /// Number of captures rejected for this reason.
    pub count: u64,
    /// At most three example contexts, formatted as `line N: message`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use tempspike_core::make_stub_report;
///
/// let report = make_stub_report("capture.codes", 123);
/// assert!(report.readings.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "tempspike".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        capture_summary: None,
        readings: vec![],
        rejects: vec![],
    }
}
