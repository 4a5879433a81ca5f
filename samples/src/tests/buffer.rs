use crate::buf::Samples;
use crate::{ALaw, Buffer, Error, MuLaw, Reader, Result, Sample, Seek, Slice, SliceMut, Writer};

const VALUES: [f64; 9] = [-1.0, -0.75, -0.5, -0.1, 0.0, 0.1, 0.5, 0.75, 1.0];

fn roundtrip<T>(tolerance: f64)
where
    T: Sample,
{
    let mut buf = Buffer::new(Samples::<T>::new());
    assert_eq!(buf.write(&VALUES[..]).unwrap(), VALUES.len());
    assert_eq!(buf.len(), VALUES.len());

    let mut out = vec![0.0f64; VALUES.len()];
    assert_eq!(buf.read(&mut out[..]).unwrap(), VALUES.len());

    for (expected, actual) in VALUES.iter().zip(out.iter()) {
        assert!(
            (expected - actual).abs() <= tolerance,
            "{:?}: expected {} but got {}",
            T::ZERO,
            expected,
            actual
        );
    }

    assert!(buf.read(&mut out[..]).unwrap_err().is_end_of_stream());
}

#[test]
fn test_write_read_every_encoding() {
    roundtrip::<u8>(1.5 / 255.0);
    roundtrip::<i16>(1.5 / 32767.0);
    roundtrip::<i32>(1e-9);
    roundtrip::<f32>(1e-7);
    roundtrip::<f64>(0.0);
    roundtrip::<ALaw>(0.04);
    roundtrip::<MuLaw>(0.04);
}

#[test]
fn test_uint8_samples() {
    let mut buf = Buffer::new(Samples::<u8>::with_capacity(0));
    assert_eq!(buf.capacity(), 0);

    buf.write_sample(0.5);
    buf.write_sample(-0.5);

    let a = buf.read_sample().unwrap();
    let b = buf.read_sample().unwrap();

    assert!((a - 0.5).abs() < 0.01, "{}", a);
    assert!((b + 0.5).abs() < 0.01, "{}", b);
    assert!(matches!(buf.read_sample(), Err(Error::EndOfStream)));
}

#[test]
fn test_read_empty_destination() {
    let mut buf = Buffer::new(Samples::<i16>::new());
    let mut out: [f32; 0] = [];

    assert_eq!(buf.read(&mut out).unwrap(), 0);
    assert!(buf.read(&mut [0.0f32][..]).unwrap_err().is_end_of_stream());
}

#[test]
fn test_seek_beyond_unread() {
    let mut buf = Buffer::new(crate::samples![1i16, 2, 3, 4]);
    assert_eq!(buf.next(2), &[1, 2]);

    assert!(matches!(buf.seek(3), Err(Error::EndOfStream)));
    assert_eq!(buf.samples(), &[3, 4]);

    buf.seek(1).unwrap();
    assert_eq!(buf.samples(), &[2, 3, 4]);

    buf.seek(u64::MAX).unwrap_err();
    assert_eq!(buf.samples(), &[2, 3, 4]);
}

#[test]
fn test_next_is_a_view() {
    let mut buf = Buffer::new(crate::samples![1.0f64, 2.0, 3.0]);

    assert_eq!(buf.next(2), &[1.0, 2.0]);
    assert_eq!(buf.next(0), &[] as &[f64]);
    assert_eq!(buf.next(10), &[3.0]);
    assert!(buf.next(10).is_empty());
}

#[test]
fn test_samples_mut_reflects_back() {
    let mut buf = Buffer::new(crate::samples![0i32; 3]);
    buf.next(1);

    buf.samples_mut()[0] = 7;
    assert_eq!(buf.next(1), &[7]);
}

#[test]
fn test_cross_encoding_write() {
    let mut buf = Buffer::new(Samples::<MuLaw>::new());
    buf.write(&[0i16, i16::MAX, -i16::MAX][..]).unwrap();

    assert_eq!(buf.samples(), &[MuLaw(0xff), MuLaw(0x80), MuLaw(0x00)]);

    let mut out = [ALaw(0); 3];
    assert_eq!(buf.read(&mut out[..]).unwrap(), 3);
    assert_eq!(out[0], ALaw(0xd5));
}

/// A sink which accepts at most `limit` samples per write.
struct Limited {
    limit: usize,
    written: Vec<f64>,
}

impl Writer for Limited {
    fn write(&mut self, src: &dyn Slice) -> Result<usize> {
        let n = usize::min(self.limit, src.len());
        self.written.extend((0..n).map(|i| src.at(i)));
        Ok(n)
    }
}

/// A sink which always fails.
struct Broken;

impl Writer for Broken {
    fn write(&mut self, _: &dyn Slice) -> Result<usize> {
        Err(Error::InvalidData)
    }
}

#[test]
fn test_write_to() {
    let mut buf = Buffer::new(crate::samples![0u8, 255]);
    let mut sink = Limited {
        limit: usize::MAX,
        written: Vec::new(),
    };

    assert_eq!(buf.write_to(&mut sink).unwrap(), 2);
    assert_eq!(sink.written, vec![-1.0, 1.0]);
    assert!(buf.is_empty());

    // Writing an empty buffer writes nothing.
    assert_eq!(buf.write_to(&mut sink).unwrap(), 0);
}

#[test]
fn test_write_to_short_write() {
    let mut buf = Buffer::new(crate::samples![1i16, 2, 3]);
    let mut sink = Limited {
        limit: 2,
        written: Vec::new(),
    };

    assert!(matches!(buf.write_to(&mut sink), Err(Error::ShortWrite)));
    assert_eq!(sink.written.len(), 2);
    assert_eq!(buf.samples(), &[3]);
}

#[test]
fn test_write_to_error() {
    let mut buf = Buffer::new(crate::samples![1i16, 2, 3]);

    assert!(matches!(buf.write_to(&mut Broken), Err(Error::InvalidData)));
    assert_eq!(buf.len(), 3);
}

#[test]
#[should_panic]
fn test_write_to_over_reporting_sink() {
    struct Liar;

    impl Writer for Liar {
        fn write(&mut self, src: &dyn Slice) -> Result<usize> {
            Ok(src.len() + 1)
        }
    }

    let mut buf = Buffer::new(crate::samples![1i16]);
    let _ = buf.write_to(&mut Liar);
}

/// A source which produces `remaining` samples in chunks of at most `chunk`
/// before failing with `error`.
struct Source {
    remaining: usize,
    chunk: usize,
    error: fn() -> Error,
}

impl Reader for Source {
    fn read(&mut self, dst: &mut dyn SliceMut) -> Result<usize> {
        if self.remaining == 0 {
            return Err((self.error)());
        }

        let n = usize::min(usize::min(self.remaining, self.chunk), dst.len());

        for i in 0..n {
            dst.set(i, 0.5);
        }

        self.remaining -= n;
        Ok(n)
    }
}

#[test]
fn test_read_from() {
    let mut buf = Buffer::new(Samples::<i16>::new());

    let mut source = Source {
        remaining: 3000,
        chunk: 700,
        error: || Error::EndOfStream,
    };

    assert_eq!(buf.read_from(&mut source).unwrap(), 3000);
    assert_eq!(buf.len(), 3000);
    assert!(buf.samples().iter().all(|s| *s == 16384));
}

#[test]
fn test_read_from_error() {
    let mut buf = Buffer::new(crate::samples![1i16]);

    let mut source = Source {
        remaining: 10,
        chunk: 4,
        error: || Error::UnexpectedEndOfStream,
    };

    assert!(matches!(
        buf.read_from(&mut source),
        Err(Error::UnexpectedEndOfStream)
    ));

    // Samples read before the error are kept.
    assert_eq!(buf.len(), 11);
    assert_eq!(buf.samples()[0], 1);
}

#[test]
fn test_as_trait_objects() {
    let mut buf = Buffer::new(Samples::<f32>::new());

    {
        let writer: &mut dyn Writer = &mut buf;
        assert_eq!(writer.write(&&[0.5f64, 0.25][..]).unwrap(), 2);
    }

    {
        let reader: &mut dyn crate::ReadSeeker = &mut buf;
        let mut out = [0.0f64; 4];
        assert_eq!(reader.read(&mut &mut out[..]).unwrap(), 2);
        assert_eq!(out[..2], [0.5, 0.25]);
        reader.seek(0).unwrap();
    }

    assert_eq!(buf.samples(), &[0.5, 0.25]);
}
