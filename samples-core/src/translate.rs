//! Scalar conversions between linear encodings and [Normalized] samples.
//!
//! Primitive samples are encoded with linear PCM:
//!
//! * Unsigned 8-bit samples span `0` as their *highest negative* amplitude to
//!   `255` as their *highest positive* amplitude. Scaling is symmetric around
//!   the midpoint of that range, so no integer value is exactly silent.
//! * Signed samples are divided by their maximum positive value, so `i16::MAX`
//!   and `i32::MAX` map to `1.0`. The negative full scale value (`i16::MIN`)
//!   maps slightly below `-1.0` and is never produced when converting back.
//! * Float samples are passed through as-is.
//!
//! Conversions into integers round half up (`floor(x + 0.5)`) and do not clamp
//! their input. Out-of-range values saturate at the bounds of the target type.
//!
//! [Normalized]: crate::Normalized

use crate::Normalized;

#[cfg(test)]
mod tests;

const UINT8_SCALE: f64 = u8::MAX as f64;
const LINEAR16_SCALE: f64 = i16::MAX as f64;
const LINEAR32_SCALE: f64 = i32::MAX as f64;

/// Convert an unsigned 8-bit sample into a normalized sample.
///
/// # Examples
///
/// ```
/// use samples_core::translate;
///
/// assert_eq!(translate::uint8_to_normalized(0), -1.0);
/// assert_eq!(translate::uint8_to_normalized(255), 1.0);
/// ```
#[inline]
pub fn uint8_to_normalized(s: u8) -> Normalized {
    (f64::from(s) / UINT8_SCALE) * 2.0 - 1.0
}

/// Convert a normalized sample into an unsigned 8-bit sample.
///
/// # Examples
///
/// ```
/// use samples_core::translate;
///
/// assert_eq!(translate::normalized_to_uint8(-1.0), 0);
/// assert_eq!(translate::normalized_to_uint8(0.0), 128);
/// assert_eq!(translate::normalized_to_uint8(1.0), 255);
/// ```
#[inline]
pub fn normalized_to_uint8(v: Normalized) -> u8 {
    (((v + 1.0) / 2.0) * UINT8_SCALE + 0.5).floor() as u8
}

/// Convert a signed 16-bit sample into a normalized sample.
#[inline]
pub fn linear16_to_normalized(s: i16) -> Normalized {
    f64::from(s) / LINEAR16_SCALE
}

/// Convert a normalized sample into a signed 16-bit sample.
///
/// # Examples
///
/// ```
/// use samples_core::translate;
///
/// assert_eq!(translate::normalized_to_linear16(1.0), i16::MAX);
/// assert_eq!(translate::normalized_to_linear16(-1.0), -i16::MAX);
/// assert_eq!(translate::normalized_to_linear16(0.0), 0);
/// ```
#[inline]
pub fn normalized_to_linear16(v: Normalized) -> i16 {
    (v * LINEAR16_SCALE + 0.5).floor() as i16
}

/// Convert a signed 32-bit sample into a normalized sample.
#[inline]
pub fn linear32_to_normalized(s: i32) -> Normalized {
    f64::from(s) / LINEAR32_SCALE
}

/// Convert a normalized sample into a signed 32-bit sample.
#[inline]
pub fn normalized_to_linear32(v: Normalized) -> i32 {
    (v * LINEAR32_SCALE + 0.5).floor() as i32
}

/// Widen a 32-bit float sample.
#[inline]
pub fn float32_to_normalized(s: f32) -> Normalized {
    f64::from(s)
}

/// Narrow a normalized sample into a 32-bit float sample.
#[inline]
pub fn normalized_to_float32(v: Normalized) -> f32 {
    v as f32
}
