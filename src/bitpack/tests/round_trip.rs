use bitpack::{Codec, Result};

fn assert_close(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn mixed_sequence() -> Result<()> {
    let mut writer = Codec::new();
    writer
        .add_bit(false)
        .add_uint(654321, 60)?
        .add_int(-1234, 30)?
        .add_float(123.45678)?
        .add_double(-123.45678)?
        .add_string("Hello world!")?;

    assert_eq!(writer.written_bits(), 1 + 60 + 30 + 32 + 64 + 13 * 8);

    let mut reader = Codec::from_vec(writer.into_inner());
    assert!(!reader.read_bit()?);
    assert_eq!(reader.read_uint(60)?, 654321);
    assert_eq!(reader.read_int(30)?, -1234);
    assert_close(reader.read_float()? as f64, 123.45678, 1e-4);
    assert_close(reader.read_double()?, -123.45678, 1e-9);
    assert_eq!(reader.read_str()?, "Hello world!");

    Ok(())
}

#[test]
fn unsigned_all_widths() -> Result<()> {
    for bits in 1..=u64::BITS {
        let mut codec = Codec::new();
        codec.add_uint(u64::MAX, bits)?.add_uint(0x5555_5555_5555_5555, bits)?;

        let mut codec = Codec::from_vec(codec.into_inner());
        assert_eq!(codec.read_uint(bits)?, u64::MAX >> (64 - bits));
        assert_eq!(
            codec.read_uint(bits)?,
            0x5555_5555_5555_5555 & (u64::MAX >> (64 - bits))
        );
    }

    Ok(())
}

#[test]
fn signed_all_widths() -> Result<()> {
    for bits in 2..=u64::BITS {
        let min = i64::MIN >> (64 - bits);
        let max = i64::MAX >> (64 - bits);

        let values = [min, min + 1, -1, 0, 1, max - 1, max];

        let mut codec = Codec::new();
        for value in values {
            codec.add_int(value, bits)?;
        }

        let mut codec = Codec::from_vec(codec.into_inner());
        for value in values {
            assert_eq!(codec.read_int(bits)?, value, "{bits}-bit {value}");
        }
    }

    Ok(())
}

#[test]
fn zero_is_exact() -> Result<()> {
    let mut codec = Codec::new();
    codec.add_float(0.0)?.add_double(0.0)?.add_double(-0.0)?;

    let mut codec = Codec::from_vec(codec.into_inner());
    assert_eq!(codec.read_float()?, 0.0);
    assert_eq!(codec.read_double()?, 0.0);

    let negative_zero = codec.read_double()?;
    assert_eq!(negative_zero, 0.0);
    assert!(negative_zero.is_sign_positive());

    Ok(())
}

#[test]
fn unit_magnitude_reads_as_zero() -> Result<()> {
    let mut codec = Codec::new();
    codec.add_float(1.0)?.add_double(-1.0)?;

    let mut codec = Codec::from_vec(codec.into_inner());
    assert_eq!(codec.read_float()?, 0.0);
    assert_eq!(codec.read_double()?, 0.0);

    Ok(())
}

#[test]
fn floats_approximate() -> Result<()> {
    let values = [
        1.5f32,
        -2.0,
        0.1,
        -0.333_333_34,
        3.402_823_5e38,
        1.175_494_4e-38,
        6.5e-39,
        42_000_000.0,
    ];

    let mut codec = Codec::new();
    for value in values {
        codec.add_float(value)?;
    }

    let mut codec = Codec::from_vec(codec.into_inner());
    for value in values {
        let actual = codec.read_float()?;
        assert_close(actual as f64, value as f64, value.abs() as f64 * 1e-6);
    }

    Ok(())
}

#[test]
fn doubles_approximate() -> Result<()> {
    let values = [
        std::f64::consts::PI,
        -std::f64::consts::E,
        1e-300,
        -1.7e308,
        f64::MAX,
        f64::MIN_POSITIVE,
        123_456_789.123_456_78,
        0.999_999_999_999,
    ];

    let mut codec = Codec::new();
    for value in values {
        codec.add_double(value)?;
    }

    let mut codec = Codec::from_vec(codec.into_inner());
    for value in values {
        let actual = codec.read_double()?;
        assert_close(actual, value, value.abs() * 1e-12);
    }

    Ok(())
}

#[test]
fn empty_string() -> Result<()> {
    let mut codec = Codec::new();
    codec.add_string("")?.add_bit(true);

    let mut codec = Codec::from_vec(codec.into_inner());
    assert!(codec.read_string()?.is_empty());
    assert!(codec.read_bit()?);

    Ok(())
}

#[test]
fn unaligned_string() -> Result<()> {
    let mut codec = Codec::new();
    codec
        .add_bit(true)
        .add_string("bit-packed")?
        .add_int(-3, 3)?;

    let mut codec = Codec::from(codec.view());
    assert!(codec.read_bit()?);
    assert_eq!(codec.read_str()?, "bit-packed");
    assert_eq!(codec.read_int(3)?, -3);

    Ok(())
}
