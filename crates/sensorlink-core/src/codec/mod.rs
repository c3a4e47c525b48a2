//! Payload decoding modules.
//!
//! Each payload format follows a layered structure:
//! - `layout`: field widths, sentinels and scale factors (source of truth)
//! - `reader`: forward-only byte access over a call-local cursor
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Decoders are pure and contain no I/O; the `console` and `analysis` layers
//! handle file access and aggregation.

pub(crate) mod common;
pub mod uplink;
