//! AT-console log source.
//!
//! The device prints `$SEND: <hex>` on its AT console after every uplink it
//! transmits, interleaved with status and join messages. This module reads
//! such a log line by line and emits one `UplinkEvent` per send line. Lines
//! are decoded lossily, so stray non-UTF-8 bytes only affect their own line.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::AtLogSource;
