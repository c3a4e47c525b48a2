use thiserror::Error;

/// Errors returned when a logged payload is not valid hex.
///
/// # Examples
/// ```
/// use sensorlink_core::{HexError, parse_hex_payload};
///
/// let err = parse_hex_payload("01c").unwrap_err();
/// assert_eq!(err, HexError::OddLength { len: 3 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("hex payload has odd length {len}")]
    OddLength { len: usize },
    /// `index` is a byte offset into the payload text.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

impl HexError {
    pub(crate) fn from_hex(err: hex::FromHexError, text: &str) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
                // hex reports a single byte; recover the full character when it starts there.
                character: text
                    .get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(c),
                index,
            },
            _ => HexError::OddLength { len: text.len() },
        }
    }
}
