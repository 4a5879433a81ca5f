//! Convert a file of raw little-endian samples from one encoding to another.
//!
//! ```bash
//! cargo run --package samples-demos --bin transcode -- i16 mulaw input.raw output.raw
//! ```
//!
//! Supported encodings are `u8`, `i16`, `i32`, `f32`, `f64`, `alaw` and
//! `mulaw`. Set `RUST_LOG=trace` to see how samples move through the buffers.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use samples::buf::Samples;
use samples::{ALaw, Buffer, MuLaw, Reader, Sample, Writer};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// A sample which has a fixed-size little-endian representation.
trait Pcm: Sample {
    /// The number of bytes of each sample.
    const SIZE: usize;

    /// Decode a sample out of exactly [Pcm::SIZE] bytes.
    fn from_le(bytes: &[u8]) -> Self;

    /// Append the encoded sample to `out`.
    fn to_le(self, out: &mut Vec<u8>);
}

macro_rules! impl_pcm {
    ($($ty:ty),*) => {
        $(
            impl Pcm for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn from_le(bytes: &[u8]) -> Self {
                    let mut array = [0u8; std::mem::size_of::<$ty>()];
                    array.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(array)
                }

                fn to_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_pcm!(u8, i16, i32, f32, f64);

impl Pcm for ALaw {
    const SIZE: usize = 1;

    fn from_le(bytes: &[u8]) -> Self {
        ALaw(bytes[0])
    }

    fn to_le(self, out: &mut Vec<u8>) {
        out.push(self.0);
    }
}

impl Pcm for MuLaw {
    const SIZE: usize = 1;

    fn from_le(bytes: &[u8]) -> Self {
        MuLaw(bytes[0])
    }

    fn to_le(self, out: &mut Vec<u8>) {
        out.push(self.0);
    }
}

/// A sink which can hand back what was written to it in encoded form.
trait Output: Writer {
    fn to_bytes(&self) -> Vec<u8>;
}

impl<T> Output for Buffer<T>
where
    T: Pcm,
{
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * T::SIZE);

        for s in self.samples() {
            s.to_le(&mut out);
        }

        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    U8,
    I16,
    I32,
    F32,
    F64,
    ALaw,
    MuLaw,
}

impl Encoding {
    fn decode(self, bytes: &[u8]) -> Result<Box<dyn Reader>> {
        match self {
            Encoding::U8 => decode::<u8>(bytes),
            Encoding::I16 => decode::<i16>(bytes),
            Encoding::I32 => decode::<i32>(bytes),
            Encoding::F32 => decode::<f32>(bytes),
            Encoding::F64 => decode::<f64>(bytes),
            Encoding::ALaw => decode::<ALaw>(bytes),
            Encoding::MuLaw => decode::<MuLaw>(bytes),
        }
    }

    fn output(self) -> Box<dyn Output> {
        match self {
            Encoding::U8 => Box::new(Buffer::new(Samples::<u8>::new())),
            Encoding::I16 => Box::new(Buffer::new(Samples::<i16>::new())),
            Encoding::I32 => Box::new(Buffer::new(Samples::<i32>::new())),
            Encoding::F32 => Box::new(Buffer::new(Samples::<f32>::new())),
            Encoding::F64 => Box::new(Buffer::new(Samples::<f64>::new())),
            Encoding::ALaw => Box::new(Buffer::new(Samples::<ALaw>::new())),
            Encoding::MuLaw => Box::new(Buffer::new(Samples::<MuLaw>::new())),
        }
    }
}

impl FromStr for Encoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "u8" => Encoding::U8,
            "i16" => Encoding::I16,
            "i32" => Encoding::I32,
            "f32" => Encoding::F32,
            "f64" => Encoding::F64,
            "alaw" => Encoding::ALaw,
            "mulaw" => Encoding::MuLaw,
            other => bail!("unsupported encoding `{}`", other),
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::U8 => "u8",
            Encoding::I16 => "i16",
            Encoding::I32 => "i32",
            Encoding::F32 => "f32",
            Encoding::F64 => "f64",
            Encoding::ALaw => "alaw",
            Encoding::MuLaw => "mulaw",
        };

        f.write_str(name)
    }
}

fn decode<T>(bytes: &[u8]) -> Result<Box<dyn Reader>>
where
    T: Pcm,
{
    if bytes.len() % T::SIZE != 0 {
        bail!(
            "input of {} bytes is not a whole number of {} byte samples",
            bytes.len(),
            T::SIZE
        );
    }

    let samples = bytes.chunks_exact(T::SIZE).map(T::from_le).collect::<Samples<T>>();
    Ok(Box::new(Buffer::new(samples)))
}

fn transcode(from: Encoding, to: Encoding, input: &[u8]) -> Result<Vec<u8>> {
    let mut source = from.decode(input)?;
    let mut sink = to.output();

    let n = samples::io::copy(&mut *sink, &mut *source)?;
    tracing::info!(samples = n, %from, %to, "transcoded");
    Ok(sink.to_bytes())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let mut args = std::env::args_os();
    args.next();

    let mut arg = |name: &str| {
        args.next()
            .ok_or_else(|| anyhow!("missing argument <{}>", name))
    };

    let from = arg("from")?;
    let to = arg("to")?;
    let input = PathBuf::from(arg("input")?);
    let output = PathBuf::from(arg("output")?);

    let from = from
        .to_str()
        .ok_or_else(|| anyhow!("<from> is not valid utf-8"))?
        .parse::<Encoding>()?;

    let to = to
        .to_str()
        .ok_or_else(|| anyhow!("<to> is not valid utf-8"))?
        .parse::<Encoding>()?;

    let bytes = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let bytes = transcode(from, to, &bytes)?;
    fs::write(&output, bytes).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_mulaw() -> Result<()> {
        let mut input = Vec::new();

        for s in [0i16, i16::MAX, -i16::MAX] {
            input.extend_from_slice(&s.to_le_bytes());
        }

        assert_eq!(transcode(Encoding::I16, Encoding::MuLaw, &input)?, vec![0xff, 0x80, 0x00]);
        Ok(())
    }

    #[test]
    fn test_alaw_to_f32() -> Result<()> {
        let output = transcode(Encoding::ALaw, Encoding::F32, &[0xd5, 0xd5])?;

        // A-law has no exact zero, silence expands to the smallest step.
        let silence = (8.0f64 / 32767.0) as f32;
        assert_eq!(output, [silence.to_le_bytes(), silence.to_le_bytes()].concat());
        Ok(())
    }

    #[test]
    fn test_partial_sample() {
        assert!(transcode(Encoding::I32, Encoding::U8, &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_parse_encoding() {
        for name in ["u8", "i16", "i32", "f32", "f64", "alaw", "mulaw"] {
            let encoding = name.parse::<Encoding>().unwrap();
            assert_eq!(encoding.to_string(), name);
        }

        assert!("pcm".parse::<Encoding>().is_err());
    }
}
