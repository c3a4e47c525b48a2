pub const HEADER_LEN: usize = 1;
pub const VOLTAGE_LEN: usize = 1;
pub const TEMPERATURE_LEN: usize = 2;
pub const PAYLOAD_LEN: usize = HEADER_LEN + VOLTAGE_LEN + TEMPERATURE_LEN;

pub const VOLTAGE_SENTINEL: u8 = 0xff;
/// Raw pattern 0x7FFF; the positive maximum, so no negative reading can match it.
pub const TEMPERATURE_SENTINEL: i16 = 0x7fff;

/// Both voltage and temperature are transmitted in tenths.
pub const TENTHS: f64 = 10.0;

pub const HEADER_BOOT: u8 = 0x00;
pub const HEADER_UPDATE: u8 = 0x01;
pub const HEADER_BUTTON_CLICK: u8 = 0x02;
pub const HEADER_BUTTON_HOLD: u8 = 0x03;
