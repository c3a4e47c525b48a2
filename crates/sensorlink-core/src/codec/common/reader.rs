/// Map a raw field to `None` when it carries the "no reading" sentinel.
pub(crate) fn unless_sentinel<T: PartialEq>(value: T, sentinel: T) -> Option<T> {
    if value == sentinel { None } else { Some(value) }
}

/// Scale a raw integer expressed in tenths to its decimal value.
///
/// Integer inputs up to 16 bits are exact in `f64`, and IEEE division is
/// correctly rounded, so `scale_tenths(200) == 20.0` and
/// `scale_tenths(-1) == -0.1` hold exactly.
pub(crate) fn scale_tenths(raw: impl Into<f64>, divisor: f64) -> f64 {
    raw.into() / divisor
}
