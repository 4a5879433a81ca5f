use super::*;

// Reference expansion as described by G.711, computed rather than looked up.
fn reference_alaw(code: u8) -> i16 {
    let a = code ^ 0x55;
    let mut t = i32::from(a & 0x0f) << 4;
    let segment = i32::from((a & 0x70) >> 4);

    match segment {
        0 => t += 8,
        1 => t += 0x108,
        _ => {
            t += 0x108;
            t <<= segment - 1;
        }
    }

    if a & 0x80 != 0 {
        t as i16
    } else {
        -t as i16
    }
}

fn reference_mulaw(code: u8) -> i16 {
    let u = !code;
    let mut t = (i32::from(u & 0x0f) << 3) + MULAW_BIAS;
    t <<= (u & 0x70) >> 4;

    if u & 0x80 != 0 {
        (MULAW_BIAS - t) as i16
    } else {
        (t - MULAW_BIAS) as i16
    }
}

#[test]
fn test_alaw_decompress_table() {
    for code in 0..=u8::MAX {
        assert_eq!(alaw_to_linear16(code), reference_alaw(code), "code {:#04x}", code);
    }
}

#[test]
fn test_mulaw_decompress_table() {
    for code in 0..=u8::MAX {
        assert_eq!(mulaw_to_linear16(code), reference_mulaw(code), "code {:#04x}", code);
    }
}

#[test]
fn test_silence() {
    assert_eq!(linear16_to_alaw(0), 0xd5);
    assert_eq!(linear16_to_mulaw(0), 0xff);
    assert_eq!(ALaw::from_linear16(0), ALaw(0xd5));
    assert_eq!(MuLaw::from_linear16(0), MuLaw(0xff));
}

#[test]
fn test_alaw_sign_convention() {
    // Non-negative samples carry the sign bit.
    assert_eq!(linear16_to_alaw(1000) & 0x80, 0x80);
    assert_eq!(linear16_to_alaw(-1000) & 0x80, 0x00);
    assert_eq!(linear16_to_alaw(1000) ^ 0x80, linear16_to_alaw(-1000));
}

#[test]
fn test_mulaw_sign_convention() {
    assert_eq!(linear16_to_mulaw(1000) & 0x80, 0x80);
    assert_eq!(linear16_to_mulaw(-1000) & 0x80, 0x00);
}

#[test]
fn test_alaw_buckets() {
    for code in 0..=u8::MAX {
        let linear = alaw_to_linear16(code);
        let again = alaw_to_linear16(linear16_to_alaw(linear));
        assert_eq!(linear, again, "code {:#04x}", code);
    }
}

#[test]
fn test_mulaw_buckets() {
    for code in 0..=u8::MAX {
        let linear = mulaw_to_linear16(code);
        let again = mulaw_to_linear16(linear16_to_mulaw(linear));
        assert_eq!(linear, again, "code {:#04x}", code);
    }
}

#[test]
fn test_clipping() {
    assert_eq!(linear16_to_alaw(i16::MAX), linear16_to_alaw(32635));
    assert_eq!(linear16_to_alaw(i16::MIN), linear16_to_alaw(-32635));
    assert_eq!(linear16_to_mulaw(i16::MAX), linear16_to_mulaw(32635));
    assert_eq!(linear16_to_mulaw(i16::MIN), linear16_to_mulaw(-32635));

    assert_eq!(alaw_to_linear16(linear16_to_alaw(i16::MIN)), -32256);
    assert_eq!(mulaw_to_linear16(linear16_to_mulaw(i16::MIN)), -32124);
}

#[test]
fn test_monotonic() {
    let mut last_alaw = i16::MIN;
    let mut last_mulaw = i16::MIN;

    for s in (i16::MIN..=i16::MAX).step_by(7) {
        let alaw = alaw_to_linear16(linear16_to_alaw(s));
        let mulaw = mulaw_to_linear16(linear16_to_mulaw(s));
        assert!(alaw >= last_alaw, "alaw not monotonic at {}", s);
        assert!(mulaw >= last_mulaw, "mulaw not monotonic at {}", s);
        last_alaw = alaw;
        last_mulaw = mulaw;
    }
}

#[test]
fn test_quantization_error() {
    // Error is bounded by half of the largest step size of each law.
    for s in -32635..=32635i16 {
        let alaw = alaw_to_linear16(linear16_to_alaw(s));
        let mulaw = mulaw_to_linear16(linear16_to_mulaw(s));
        assert!((i32::from(alaw) - i32::from(s)).abs() <= 1024, "alaw {}", s);
        assert!((i32::from(mulaw) - i32::from(s)).abs() <= 1024, "mulaw {}", s);
    }
}
