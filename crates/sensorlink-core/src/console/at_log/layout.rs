/// Prefix of the console line printed after each transmission.
pub const SEND_PREFIX: &str = "$SEND:";

pub const LINE_BUFFER_CAPACITY: usize = 128;
