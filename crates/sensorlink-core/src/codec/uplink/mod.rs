//! Sensor uplink payload decoding.
//!
//! The payload is a fixed sequence of three fields read front to back: an
//! unsigned header byte, an unsigned voltage byte in tenths of a volt, and a
//! big-endian two's-complement temperature in tenths of a degree Celsius.
//! Voltage `0xFF` and temperature `0x7FFF` are "no reading" sentinels and
//! decode to `None`. The temperature sentinel is the bit pattern `0x7FFF`,
//! which as `i16` is `i16::MAX`; no negative reading ever matches it.
//!
//! A payload too short for any field fails the whole decode; no partial
//! reading is produced. Trailing bytes after the last field are ignored.
//! Field widths and sentinels live in `layout`, cursor reads in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{DecodedReading, HeaderKind, decode_uplink};
