use super::error::DecodeError;

/// Forward-only cursor over one payload.
///
/// The cursor borrows the payload for the duration of a single decode and is
/// never shared between calls. A failed read leaves the position unchanged.
pub struct ByteCursor<'a> {
    payload: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self {
            payload,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.payload.len().saturating_sub(self.position)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [value] = self.take::<1>()?;
        Ok(value)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, DecodeError> {
        self.take::<2>().map(u16::from_be_bytes)
    }

    pub fn read_i16_be(&mut self) -> Result<i16, DecodeError> {
        self.take::<2>().map(i16::from_be_bytes)
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let out_of_range = DecodeError::OutOfRange {
            offset: self.position,
            needed: N,
            available: self.payload.len(),
        };
        let end = self.position.checked_add(N).ok_or(out_of_range.clone())?;
        let bytes: [u8; N] = self
            .payload
            .get(self.position..end)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(out_of_range)?;
        self.position = end;
        Ok(bytes)
    }
}
