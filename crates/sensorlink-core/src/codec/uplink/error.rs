use thiserror::Error;

/// Errors returned by uplink decoding.
///
/// Every byte value is valid field data, so running out of bytes is the only
/// way a decode can fail.
///
/// # Examples
/// ```
/// use sensorlink_core::{DecodeError, decode};
///
/// let err = decode(&[0x01], 1).unwrap_err();
/// assert!(matches!(err, DecodeError::OutOfRange { offset: 1, .. }));
/// assert!(err.to_string().contains("out of range"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("read out of range: need {needed} bytes at offset {offset}, payload has {available}")]
    OutOfRange {
        offset: usize,
        needed: usize,
        available: usize,
    },
}
