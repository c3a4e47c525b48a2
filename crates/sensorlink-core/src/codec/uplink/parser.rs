use serde::{Deserialize, Serialize};

use super::error::DecodeError;
use super::layout;
use super::reader::ByteCursor;
use crate::codec::common::reader::{scale_tenths, unless_sentinel};

/// Application-level reading decoded from one uplink payload.
///
/// Absent values serialize as `null`; the field set never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedReading {
    /// Raw header byte, never absent.
    pub header: u8,
    /// Supply voltage in volts, `None` when the device had no measurement.
    pub voltage: Option<f64>,
    /// Temperature in degrees Celsius, `None` when the device had no measurement.
    pub temperature: Option<f64>,
}

impl DecodedReading {
    pub fn header_kind(&self) -> HeaderKind {
        HeaderKind::from(self.header)
    }
}

/// Reason the device sent the uplink, as carried in the header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeaderKind {
    Boot,
    Update,
    ButtonClick,
    ButtonHold,
    Unknown(u8),
}

impl HeaderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderKind::Boot => "boot",
            HeaderKind::Update => "update",
            HeaderKind::ButtonClick => "button_click",
            HeaderKind::ButtonHold => "button_hold",
            HeaderKind::Unknown(_) => "unknown",
        }
    }
}

impl From<u8> for HeaderKind {
    fn from(value: u8) -> Self {
        match value {
            layout::HEADER_BOOT => HeaderKind::Boot,
            layout::HEADER_UPDATE => HeaderKind::Update,
            layout::HEADER_BUTTON_CLICK => HeaderKind::ButtonClick,
            layout::HEADER_BUTTON_HOLD => HeaderKind::ButtonHold,
            other => HeaderKind::Unknown(other),
        }
    }
}

/// Decode one uplink payload.
///
/// `port` is the LoRaWAN FPort the payload arrived on. Every port carries the
/// same layout, so it only shows up in trace logs.
///
/// # Examples
/// ```
/// use sensorlink_core::decode;
///
/// let reading = decode(&[0x02, 0xc8, 0x01, 0x2c], 1)?;
/// assert_eq!(reading.header, 2);
/// assert_eq!(reading.voltage, Some(20.0));
/// assert_eq!(reading.temperature, Some(30.0));
/// # Ok::<(), sensorlink_core::DecodeError>(())
/// ```
///
/// # Errors
/// Returns `DecodeError::OutOfRange` when the payload ends before the last
/// field.
pub fn decode_uplink(payload: &[u8], port: u8) -> Result<DecodedReading, DecodeError> {
    let mut cursor = ByteCursor::new(payload);

    let header = cursor.read_u8()?;
    let raw_voltage = cursor.read_u8()?;
    let raw_temperature = cursor.read_i16_be()?;

    let voltage = unless_sentinel(raw_voltage, layout::VOLTAGE_SENTINEL)
        .map(|raw| scale_tenths(raw, layout::TENTHS));
    let temperature = unless_sentinel(raw_temperature, layout::TEMPERATURE_SENTINEL)
        .map(|raw| scale_tenths(raw, layout::TENTHS));

    log::trace!(
        "decoded uplink on port {port}: header={header:#04x} voltage={voltage:?} temperature={temperature:?} ({} trailing bytes)",
        cursor.remaining()
    );

    Ok(DecodedReading {
        header,
        voltage,
        temperature,
    })
}
