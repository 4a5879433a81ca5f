use core::fmt;

use crate::g711::{self, ALaw, MuLaw};
use crate::translate;

/// A sample in its normalized, encoding independent form.
///
/// By convention the value lies in the range `-1.0` to `1.0` (inclusive), but
/// this is not enforced. Only the companding encodings ([ALaw] and [MuLaw])
/// clip values which are out of range, linear encodings will happily produce
/// saturated values.
pub type Normalized = f64;

/// A sample encoding that can be stored in a sample container.
///
/// Every sample can be converted to and from its [Normalized] form, which is
/// what allows containers of different encodings to be copied into each
/// other.
///
/// The following encodings are provided:
///
/// * `u8` for unsigned 8-bit linear PCM.
/// * `i16` and `i32` for signed 16 and 32-bit linear PCM.
/// * `f32` and `f64` for floating-point PCM, which is passed through as-is.
/// * [ALaw] and [MuLaw] for the G.711 companding encodings.
///
/// # Examples
///
/// ```
/// use samples_core::{MuLaw, Sample};
///
/// assert_eq!(i16::from_normalized(1.0), i16::MAX);
/// assert_eq!(u8::from_normalized(-1.0), 0);
/// assert_eq!(MuLaw::from_normalized(0.0), MuLaw(0xff));
/// assert_eq!(0.25f32.to_normalized(), 0.25);
/// ```
pub trait Sample: 'static + Copy + Default + PartialEq + fmt::Debug {
    /// The all-zeros value of the sample.
    ///
    /// Note that this is not necessarily silence. For unsigned PCM the zero
    /// value is the *highest negative* amplitude.
    const ZERO: Self;

    /// Convert the sample into its normalized form.
    fn to_normalized(self) -> Normalized;

    /// Construct a sample from its normalized form.
    fn from_normalized(value: Normalized) -> Self;
}

// Helper macro to implement [Sample] for linear encodings.
macro_rules! impl_linear {
    ($ty:ty, $zero:expr, $to:path, $from:path) => {
        impl Sample for $ty {
            const ZERO: Self = $zero;

            #[inline]
            fn to_normalized(self) -> Normalized {
                $to(self)
            }

            #[inline]
            fn from_normalized(value: Normalized) -> Self {
                $from(value)
            }
        }
    };
}

impl_linear!(
    u8,
    0,
    translate::uint8_to_normalized,
    translate::normalized_to_uint8
);
impl_linear!(
    i16,
    0,
    translate::linear16_to_normalized,
    translate::normalized_to_linear16
);
impl_linear!(
    i32,
    0,
    translate::linear32_to_normalized,
    translate::normalized_to_linear32
);
impl_linear!(
    f32,
    0.0,
    translate::float32_to_normalized,
    translate::normalized_to_float32
);

impl Sample for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn to_normalized(self) -> Normalized {
        self
    }

    #[inline]
    fn from_normalized(value: Normalized) -> Self {
        value
    }
}

impl Sample for ALaw {
    const ZERO: Self = ALaw(0);

    #[inline]
    fn to_normalized(self) -> Normalized {
        translate::linear16_to_normalized(g711::alaw_to_linear16(self.0))
    }

    #[inline]
    fn from_normalized(value: Normalized) -> Self {
        ALaw(g711::linear16_to_alaw(translate::normalized_to_linear16(
            value,
        )))
    }
}

impl Sample for MuLaw {
    const ZERO: Self = MuLaw(0);

    #[inline]
    fn to_normalized(self) -> Normalized {
        translate::linear16_to_normalized(g711::mulaw_to_linear16(self.0))
    }

    #[inline]
    fn from_normalized(value: Normalized) -> Self {
        MuLaw(g711::linear16_to_mulaw(translate::normalized_to_linear16(
            value,
        )))
    }
}
