mod at_log;

pub use at_log::AtLogSource;
pub use at_log::error::HexError;

use thiserror::Error;

/// One transmitted payload found in a device log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UplinkEvent {
    /// 1-based line number in the log.
    pub line: u64,
    /// Payload text exactly as logged, trimmed.
    pub payload_hex: String,
    /// Payload bytes, or why the logged text is not valid hex.
    pub payload: Result<Vec<u8>, HexError>,
}

pub trait UplinkSource {
    fn next_uplink(&mut self) -> Result<Option<UplinkEvent>, SourceError>;

    /// Number of lines consumed so far, uplink or not.
    fn lines_read(&self) -> u64;
}

/// Decode a textual payload such as `01c8012c`, ignoring surrounding whitespace.
///
/// # Errors
/// Returns `HexError` for odd-length text or non-hex characters.
pub fn parse_hex_payload(text: &str) -> Result<Vec<u8>, HexError> {
    at_log::reader::decode_hex(text.trim())
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
