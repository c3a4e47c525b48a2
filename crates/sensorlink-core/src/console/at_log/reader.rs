use super::error::HexError;
use super::layout;

/// Return the payload text of a `$SEND:` line, or `None` for any other line.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use sensorlink_core::console::at_log::reader::send_payload_text;
///
/// assert_eq!(send_payload_text("$SEND: 01c8012c\r"), Some("01c8012c"));
/// assert_eq!(send_payload_text("$JOIN_OK"), None);
/// ```
pub fn send_payload_text(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix(layout::SEND_PREFIX)
        .map(str::trim)
}

/// Decode a hex payload, accepting upper and lower case digits.
///
/// # Errors
/// Returns `HexError` for odd-length text or non-hex characters.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
    hex::decode(text).map_err(|err| HexError::from_hex(err, text))
}
