//! ITU-T G.711 companding.
//!
//! A-law and μ-law compress 16-bit linear samples into 8-bit codes using a
//! piecewise logarithmic curve. The byte values produced here are the wire
//! format of the two encodings and must match the reference tables exactly.
//!
//! The two laws look similar but are not interchangeable. A-law inverts every
//! other bit of its code (`0x55`) and sets the sign bit for *non-negative*
//! samples, while μ-law biases the magnitude before compression and
//! complements the whole code.
//!
//! # Examples
//!
//! ```
//! use samples_core::g711;
//!
//! // Silence.
//! assert_eq!(g711::linear16_to_alaw(0), 0xd5);
//! assert_eq!(g711::linear16_to_mulaw(0), 0xff);
//!
//! assert_eq!(g711::alaw_to_linear16(0xd5), 8);
//! assert_eq!(g711::mulaw_to_linear16(0xff), 0);
//! ```

#[cfg(test)]
mod tests;

/// An A-law encoded sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ALaw(pub u8);

/// A μ-law encoded sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MuLaw(pub u8);

/// Largest magnitude that can be compressed.
const CLIP: i32 = 32635;
/// Bias added to the magnitude before μ-law compression.
const MULAW_BIAS: i32 = 0x84;

/// A-law exponent indexed by bits 8 to 14 of the magnitude.
#[rustfmt::skip]
static ALAW_COMPRESS: [u8; 128] = [
    1, 1, 2, 2, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
];

#[rustfmt::skip]
static ALAW_DECOMPRESS: [i16; 256] = [
    -5504, -5248, -6016, -5760, -4480, -4224, -4992, -4736,
    -7552, -7296, -8064, -7808, -6528, -6272, -7040, -6784,
    -2752, -2624, -3008, -2880, -2240, -2112, -2496, -2368,
    -3776, -3648, -4032, -3904, -3264, -3136, -3520, -3392,
    -22016, -20992, -24064, -23040, -17920, -16896, -19968, -18944,
    -30208, -29184, -32256, -31232, -26112, -25088, -28160, -27136,
    -11008, -10496, -12032, -11520, -8960, -8448, -9984, -9472,
    -15104, -14592, -16128, -15616, -13056, -12544, -14080, -13568,
    -344, -328, -376, -360, -280, -264, -312, -296,
    -472, -456, -504, -488, -408, -392, -440, -424,
    -88, -72, -120, -104, -24, -8, -56, -40,
    -216, -200, -248, -232, -152, -136, -184, -168,
    -1376, -1312, -1504, -1440, -1120, -1056, -1248, -1184,
    -1888, -1824, -2016, -1952, -1632, -1568, -1760, -1696,
    -688, -656, -752, -720, -560, -528, -624, -592,
    -944, -912, -1008, -976, -816, -784, -880, -848,
    5504, 5248, 6016, 5760, 4480, 4224, 4992, 4736,
    7552, 7296, 8064, 7808, 6528, 6272, 7040, 6784,
    2752, 2624, 3008, 2880, 2240, 2112, 2496, 2368,
    3776, 3648, 4032, 3904, 3264, 3136, 3520, 3392,
    22016, 20992, 24064, 23040, 17920, 16896, 19968, 18944,
    30208, 29184, 32256, 31232, 26112, 25088, 28160, 27136,
    11008, 10496, 12032, 11520, 8960, 8448, 9984, 9472,
    15104, 14592, 16128, 15616, 13056, 12544, 14080, 13568,
    344, 328, 376, 360, 280, 264, 312, 296,
    472, 456, 504, 488, 408, 392, 440, 424,
    88, 72, 120, 104, 24, 8, 56, 40,
    216, 200, 248, 232, 152, 136, 184, 168,
    1376, 1312, 1504, 1440, 1120, 1056, 1248, 1184,
    1888, 1824, 2016, 1952, 1632, 1568, 1760, 1696,
    688, 656, 752, 720, 560, 528, 624, 592,
    944, 912, 1008, 976, 816, 784, 880, 848,
];

/// μ-law exponent indexed by bits 7 to 14 of the biased magnitude.
#[rustfmt::skip]
static MULAW_COMPRESS: [u8; 256] = [
    0, 0, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
];

#[rustfmt::skip]
static MULAW_DECOMPRESS: [i16; 256] = [
    -32124, -31100, -30076, -29052, -28028, -27004, -25980, -24956,
    -23932, -22908, -21884, -20860, -19836, -18812, -17788, -16764,
    -15996, -15484, -14972, -14460, -13948, -13436, -12924, -12412,
    -11900, -11388, -10876, -10364, -9852, -9340, -8828, -8316,
    -7932, -7676, -7420, -7164, -6908, -6652, -6396, -6140,
    -5884, -5628, -5372, -5116, -4860, -4604, -4348, -4092,
    -3900, -3772, -3644, -3516, -3388, -3260, -3132, -3004,
    -2876, -2748, -2620, -2492, -2364, -2236, -2108, -1980,
    -1884, -1820, -1756, -1692, -1628, -1564, -1500, -1436,
    -1372, -1308, -1244, -1180, -1116, -1052, -988, -924,
    -876, -844, -812, -780, -748, -716, -684, -652,
    -620, -588, -556, -524, -492, -460, -428, -396,
    -372, -356, -340, -324, -308, -292, -276, -260,
    -244, -228, -212, -196, -180, -164, -148, -132,
    -120, -112, -104, -96, -88, -80, -72, -64,
    -56, -48, -40, -32, -24, -16, -8, 0,
    32124, 31100, 30076, 29052, 28028, 27004, 25980, 24956,
    23932, 22908, 21884, 20860, 19836, 18812, 17788, 16764,
    15996, 15484, 14972, 14460, 13948, 13436, 12924, 12412,
    11900, 11388, 10876, 10364, 9852, 9340, 8828, 8316,
    7932, 7676, 7420, 7164, 6908, 6652, 6396, 6140,
    5884, 5628, 5372, 5116, 4860, 4604, 4348, 4092,
    3900, 3772, 3644, 3516, 3388, 3260, 3132, 3004,
    2876, 2748, 2620, 2492, 2364, 2236, 2108, 1980,
    1884, 1820, 1756, 1692, 1628, 1564, 1500, 1436,
    1372, 1308, 1244, 1180, 1116, 1052, 988, 924,
    876, 844, 812, 780, 748, 716, 684, 652,
    620, 588, 556, 524, 492, 460, 428, 396,
    372, 356, 340, 324, 308, 292, 276, 260,
    244, 228, 212, 196, 180, 164, 148, 132,
    120, 112, 104, 96, 88, 80, 72, 64,
    56, 48, 40, 32, 24, 16, 8, 0,
];

/// Compress a 16-bit linear sample into an A-law code.
///
/// # Examples
///
/// ```
/// use samples_core::g711;
///
/// assert_eq!(g711::linear16_to_alaw(0), 0xd5);
/// assert_eq!(g711::linear16_to_alaw(i16::MAX), 0xaa);
/// assert_eq!(g711::linear16_to_alaw(-i16::MAX), 0x2a);
/// ```
pub fn linear16_to_alaw(s: i16) -> u8 {
    // Widened so that the magnitude of `i16::MIN` is representable.
    let mut s = i32::from(s);

    // Note: the sign bit is set for samples which are *not* negative.
    let sign = (!s >> 8) & 0x80;

    if sign == 0 {
        s = -s;
    }

    if s > CLIP {
        s = CLIP;
    }

    let code = if s >= 256 {
        let exponent = i32::from(ALAW_COMPRESS[((s >> 8) & 0x7f) as usize]);
        let mantissa = (s >> (exponent + 3)) & 0x0f;
        ((exponent << 4) | mantissa) as u8
    } else {
        (s >> 4) as u8
    };

    code ^ (sign ^ 0x55) as u8
}

/// Expand an A-law code into a 16-bit linear sample.
#[inline]
pub fn alaw_to_linear16(code: u8) -> i16 {
    ALAW_DECOMPRESS[usize::from(code)]
}

/// Compress a 16-bit linear sample into a μ-law code.
///
/// # Examples
///
/// ```
/// use samples_core::g711;
///
/// assert_eq!(g711::linear16_to_mulaw(0), 0xff);
/// assert_eq!(g711::linear16_to_mulaw(-1), 0x7f);
/// assert_eq!(g711::linear16_to_mulaw(i16::MAX), 0x80);
/// assert_eq!(g711::linear16_to_mulaw(-i16::MAX), 0x00);
/// ```
pub fn linear16_to_mulaw(s: i16) -> u8 {
    let mut s = i32::from(s);
    let sign = (s >> 8) & 0x80;

    if sign != 0 {
        s = -s;
    }

    if s > CLIP {
        s = CLIP;
    }

    s += MULAW_BIAS;

    let exponent = i32::from(MULAW_COMPRESS[((s >> 7) & 0xff) as usize]);
    let mantissa = (s >> (exponent + 3)) & 0x0f;
    !((sign | (exponent << 4) | mantissa) as u8)
}

/// Expand a μ-law code into a 16-bit linear sample.
#[inline]
pub fn mulaw_to_linear16(code: u8) -> i16 {
    MULAW_DECOMPRESS[usize::from(code)]
}

impl ALaw {
    /// Compress a 16-bit linear sample.
    #[inline]
    pub fn from_linear16(s: i16) -> Self {
        Self(linear16_to_alaw(s))
    }

    /// Expand into a 16-bit linear sample.
    #[inline]
    pub fn to_linear16(self) -> i16 {
        alaw_to_linear16(self.0)
    }
}

impl MuLaw {
    /// Compress a 16-bit linear sample.
    #[inline]
    pub fn from_linear16(s: i16) -> Self {
        Self(linear16_to_mulaw(s))
    }

    /// Expand into a 16-bit linear sample.
    #[inline]
    pub fn to_linear16(self) -> i16 {
        mulaw_to_linear16(self.0)
    }
}
