use super::*;
use rand::Rng;

const LINEAR16_STEP: f64 = 1.0 / 32767.0;

#[test]
fn test_uint8_bounds() {
    assert_eq!(uint8_to_normalized(0), -1.0);
    assert_eq!(uint8_to_normalized(255), 1.0);
    assert_eq!(normalized_to_uint8(-1.0), 0);
    assert_eq!(normalized_to_uint8(1.0), 255);

    // Neither 127 nor 128 are exactly silent.
    assert!(uint8_to_normalized(127) < 0.0);
    assert!(uint8_to_normalized(128) > 0.0);
}

#[test]
fn test_uint8_all_values() {
    for s in 0..=u8::MAX {
        assert_eq!(normalized_to_uint8(uint8_to_normalized(s)), s);
    }
}

#[test]
fn test_linear16_bounds() {
    assert_eq!(linear16_to_normalized(i16::MAX), 1.0);
    assert_eq!(linear16_to_normalized(0), 0.0);
    assert_eq!(normalized_to_linear16(1.0), i16::MAX);
    assert_eq!(normalized_to_linear16(-1.0), -i16::MAX);

    // Negative full scale reads slightly past -1.0.
    assert!(linear16_to_normalized(i16::MIN) < -1.0);
}

#[test]
fn test_linear16_rounding() {
    assert_eq!(normalized_to_linear16(0.6 / 32767.0), 1);
    assert_eq!(normalized_to_linear16(0.4 / 32767.0), 0);
    assert_eq!(normalized_to_linear16(-0.4 / 32767.0), 0);
    assert_eq!(normalized_to_linear16(-0.6 / 32767.0), -1);
}

#[test]
fn test_linear16_all_values() {
    for s in -i16::MAX..=i16::MAX {
        assert_eq!(normalized_to_linear16(linear16_to_normalized(s)), s);
    }
}

#[test]
fn test_linear16_dense() {
    for i in 0..=20_000 {
        let v = -1.0 + f64::from(i) / 10_000.0;
        let back = linear16_to_normalized(normalized_to_linear16(v));
        assert!((back - v).abs() <= LINEAR16_STEP, "{} -> {}", v, back);
    }
}

#[test]
fn test_linear32() {
    assert_eq!(linear32_to_normalized(i32::MAX), 1.0);
    assert_eq!(normalized_to_linear32(1.0), i32::MAX);
    assert_eq!(normalized_to_linear32(-1.0), -i32::MAX);
    assert_eq!(normalized_to_linear32(0.0), 0);

    let mut rng = rand::thread_rng();

    for _ in 0..1024 {
        let s = rng.gen_range(-i32::MAX..=i32::MAX);
        assert_eq!(normalized_to_linear32(linear32_to_normalized(s)), s);
    }
}

#[test]
fn test_float_pass_through() {
    assert_eq!(float32_to_normalized(0.25), 0.25);
    assert_eq!(normalized_to_float32(-0.75), -0.75);

    // Out of range values are not clamped by floats.
    assert_eq!(float32_to_normalized(2.0), 2.0);
}

#[test]
fn test_out_of_range_saturates() {
    assert_eq!(normalized_to_linear16(2.0), i16::MAX);
    assert_eq!(normalized_to_linear16(-2.0), i16::MIN);
    assert_eq!(normalized_to_uint8(3.0), u8::MAX);
    assert_eq!(normalized_to_uint8(-3.0), 0);
}
