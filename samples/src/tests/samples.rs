use rand::prelude::*;

use crate::buf::Samples;
use crate::raw::Raw;
use crate::{ALaw, MuLaw, Sample, Slice, SliceMut};

#[test]
fn test_make() {
    let buf = Samples::<i32>::make(3, 10);

    assert_eq!(buf.as_slice(), &[0, 0, 0]);
    assert!(buf.capacity() >= 10);

    let buf = Samples::<MuLaw>::make(2, 2);
    assert_eq!(buf.as_slice(), &[MuLaw::ZERO; 2]);
    // The all-zeros code is not silence.
    assert_eq!(buf.at(0), -32124.0 / 32767.0);
}

#[test]
#[should_panic]
fn test_make_capacity_smaller_than_length() {
    let _ = Samples::<u8>::make(4, 3);
}

#[test]
fn test_dyn_make_preserves_encoding() {
    let buf = crate::samples![ALaw(0x12); 4];
    let made = Slice::make(&buf, 1, 8);

    assert_eq!(made.len(), 1);
    assert!(made.capacity() >= 8);
    assert!(made.as_raw().map_or(false, |raw| raw.is::<ALaw>()));
}

#[test]
fn test_set_len_within_capacity() {
    let mut buf = Samples::<f32>::with_capacity(4);
    buf.set_len(4);
    assert_eq!(buf.as_slice(), &[0.0; 4]);

    // Samples past the length survive being sliced away.
    buf[3] = 1.0;
    buf.set_len(2);
    assert_eq!(buf.as_slice(), &[0.0; 2]);
    buf.set_len(4);
    assert_eq!(buf.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
    assert_eq!(buf.capacity(), 4);
}

#[test]
fn test_spare_mut() {
    let mut buf = Samples::<i16>::with_capacity(4);
    buf.extend_from_slice(&[1, 2]);
    assert_eq!(buf.spare_mut(), &[0, 0]);

    buf.spare_mut()[0] = 3;
    buf.set_len(3);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);
    assert_eq!(buf.spare_mut().len(), 1);
}

#[test]
fn test_extend_from_slice_reallocates() {
    let mut buf = crate::samples![1u8, 2];
    assert_eq!(buf.capacity(), 2);

    buf.extend_from_slice(&[3, 4, 5]);
    assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    assert!(buf.capacity() >= 5);
    assert_eq!(buf.spare_mut().len(), buf.capacity() - 5);
    assert_eq!(Vec::from(buf), vec![1, 2, 3, 4, 5]);
}

#[test]
#[should_panic]
fn test_set_len_beyond_capacity() {
    let mut buf = Samples::<f32>::with_capacity(4);
    let cap = buf.capacity();
    buf.set_len(cap + 1);
}

#[test]
fn test_views_share_storage() {
    let mut buf = crate::samples![0i16; 8];

    {
        let view = buf.slice_mut(2, 6);
        assert_eq!(view.len(), 4);
        view.set(0, 1.0);

        let inner = &mut view[1..3];
        inner.set(1, -1.0);
    }

    assert_eq!(buf.slice(0, 5), &[0, 0, i16::MAX, 0, -i16::MAX]);
}

#[test]
#[should_panic]
fn test_slice_out_of_range() {
    let buf = crate::samples![0i16; 8];
    let _ = buf.slice(4, 9);
}

#[test]
#[should_panic]
fn test_slice_inverted() {
    let buf = crate::samples![0i16; 8];
    let _ = buf.slice(5, 4);
}

#[test]
#[should_panic]
fn test_at_out_of_range() {
    let buf = crate::samples![0u8; 2];
    buf.at(2);
}

#[test]
fn test_cross_encoding_copy_matches_per_element() {
    let mut rng = StdRng::seed_from_u64(0xa1a3);

    let from = (0..4096)
        .map(|_| rng.gen::<i16>())
        .collect::<Samples<i16>>();

    let mut alaw = Samples::<ALaw>::make(from.len(), from.len());
    let mut mulaw = Samples::<MuLaw>::make(from.len(), from.len());
    let mut uint8 = Samples::<u8>::make(from.len(), from.len());

    assert_eq!(from.copy_into(&mut alaw), from.len());
    assert_eq!(from.copy_into(&mut mulaw), from.len());
    assert_eq!(from.copy_into(&mut uint8), from.len());

    for (i, s) in from.iter().enumerate() {
        let v = s.to_normalized();
        assert_eq!(alaw[i], ALaw::from_normalized(v));
        assert_eq!(mulaw[i], MuLaw::from_normalized(v));
        assert_eq!(uint8[i], u8::from_normalized(v));
    }
}

#[test]
fn test_same_encoding_copy_is_exact() {
    let mut rng = StdRng::seed_from_u64(0xc0de);

    let from = (0..1024).map(|_| rng.gen::<f32>()).collect::<Samples<f32>>();
    let mut to = Samples::<f32>::make(512, 512);

    assert_eq!(from.copy_into(&mut to), 512);
    assert_eq!(to.as_slice(), from.slice(0, 512));
    assert_eq!(Raw::new(to.as_slice()).downcast::<f32>(), Some(from.slice(0, 512)));
}

#[test]
fn test_iter_normalized() {
    let buf = crate::samples![0i16, i16::MAX, -i16::MAX];

    assert_eq!(buf.iter_normalized().len(), 3);
    assert_eq!(
        buf.iter_normalized().rev().collect::<Vec<_>>(),
        vec![-1.0, 1.0, 0.0]
    );
}

#[test]
fn test_conversions() {
    let buf = Samples::from([1u8, 2, 3]);
    let vec: Vec<u8> = buf.clone().into();

    assert_eq!(vec, vec![1, 2, 3]);
    assert_eq!(Samples::from(vec), buf);
    assert_eq!(format!("{:?}", buf), "[1, 2, 3]");
    assert_eq!(Samples::<u8>::default(), crate::samples![]);
}
