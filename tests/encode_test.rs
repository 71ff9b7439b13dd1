//! End-to-end tests: text in, data codewords out.

use qirust_segment::{
    encode_text, EncodeError, EncodeOptions, Encoder, QrCodeEcc, QrSegmentMode, ShiftJisTable, Version,
    VersionInfo,
};

#[test]
fn test_hello_world_medium() {
    let data = encode_text("HELLO WORLD", QrCodeEcc::Medium).expect("encode failed");

    let info = data.version_info();
    assert_eq!(info.version(), Version::new(1));
    assert_eq!(info.error_correction_level(), QrCodeEcc::Medium);
    assert_eq!(info.capacity(QrSegmentMode::Alphanumeric), 20);
    assert_eq!(data.len(), 16);

    // 0010 | 000001011 | HE LL O_ WO RL (11 bits each) | D (6 bits)
    assert_eq!(
        data.as_bytes(),
        &[
            0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
            0x11,
        ]
    );
}

#[test]
fn test_numeric_low() {
    let data = encode_text("01234567", QrCodeEcc::Low).unwrap();
    assert_eq!(data.mode(), QrSegmentMode::Numeric);
    assert_eq!(data.len(), 19);
    assert_eq!(
        data.as_bytes(),
        &[
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
            0x11, 0xEC, 0x11, 0xEC,
        ]
    );
}

#[test]
fn test_byte_low() {
    let data = encode_text("hello", QrCodeEcc::Low).unwrap();
    assert_eq!(data.mode(), QrSegmentMode::Byte);
    assert_eq!(
        &data.as_bytes()[..9],
        &[0x40, 0x56, 0x86, 0x56, 0xC6, 0xC6, 0xF0, 0xEC, 0x11]
    );
}

#[test]
fn test_kanji_low() {
    let table: ShiftJisTable = [('点', 0x935F), ('茗', 0xE4AA)].into_iter().collect();
    let encoder = Encoder::new(EncodeOptions::new(QrCodeEcc::Low)).with_kanji_mapper(table);
    let data = encoder.encode("点茗").unwrap();
    assert_eq!(data.mode(), QrSegmentMode::Kanji);
    assert_eq!(
        &data.as_bytes()[..8],
        &[0x80, 0x26, 0xCF, 0xEA, 0xA8, 0x00, 0xEC, 0x11]
    );
}

#[test]
fn test_classification_cases() {
    let mode = |text: &str| QrSegmentMode::classify(text);
    assert_eq!(mode("12345"), QrSegmentMode::Numeric);
    assert_eq!(mode("HELLO WORLD"), QrSegmentMode::Alphanumeric);
    assert_eq!(mode("hello"), QrSegmentMode::Byte);
    assert_eq!(mode("漢x"), QrSegmentMode::Byte);
}

#[test]
fn test_too_many_digits_for_low() {
    let digits = "7".repeat(7090);
    let err = encode_text(&digits, QrCodeEcc::Low).unwrap_err();
    assert_eq!(
        err,
        EncodeError::NoVersionFits {
            mode: QrSegmentMode::Numeric,
            ecl: QrCodeEcc::Low,
            required: 7090,
            max: 7089,
        }
    );
}

#[test]
fn test_max_digits_fit_version_40() {
    let digits = "7".repeat(7089);
    let data = encode_text(&digits, QrCodeEcc::Low).unwrap();
    assert_eq!(data.version_info().version(), Version::MAX);
    assert_eq!(data.len(), 2956);
}

#[test]
fn test_full_capacity_every_row() {
    // Text at exactly each row's capacity selects that row or a smaller one and fits.
    for info in VersionInfo::all() {
        for (mode, unit) in [
            (QrSegmentMode::Numeric, "9"),
            (QrSegmentMode::Alphanumeric, "Z"),
            (QrSegmentMode::Byte, "z"),
        ] {
            let text = unit.repeat(info.capacity(mode));
            let data = encode_text(&text, info.error_correction_level())
                .unwrap_or_else(|e| panic!("{:?} {:?}: {}", info, mode, e));
            assert_eq!(data.mode(), mode);
            assert!(data.version_info().version() <= info.version());
            assert_eq!(data.len(), data.version_info().total_words());
        }
    }
}

#[test]
fn test_same_input_same_output() {
    for ecl in QrCodeEcc::ALL {
        let a = encode_text("https://example.com/?q=1", ecl).unwrap();
        let b = encode_text("https://example.com/?q=1", ecl).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_higher_level_needs_larger_version() {
    let text = "A".repeat(100);
    let low = encode_text(&text, QrCodeEcc::Low).unwrap();
    let high = encode_text(&text, QrCodeEcc::High).unwrap();
    assert!(high.version_info().version() > low.version_info().version());
}

#[test]
fn test_options_from_json() {
    let opts: EncodeOptions = serde_json::from_str(r#"{"ecl":"Quartile"}"#).unwrap();
    assert_eq!(opts, EncodeOptions::new(QrCodeEcc::Quartile));

    let opts: EncodeOptions = serde_json::from_str(r#"{"ecl":"High","mode":"Byte"}"#).unwrap();
    assert_eq!(opts.mode, Some(QrSegmentMode::Byte));

    let data = Encoder::new(opts).encode("12345").unwrap();
    assert_eq!(data.mode(), QrSegmentMode::Byte);
    assert_eq!(data.version_info().error_correction_level(), QrCodeEcc::High);
}

#[test]
fn test_error_messages() {
    let err = encode_text(&"1".repeat(7090), QrCodeEcc::Low).unwrap_err();
    assert_eq!(err.to_string(), "7090 characters exceed the Numeric capacity of 7089 at level L");

    let err = "Z".parse::<QrCodeEcc>().unwrap_err();
    assert_eq!(err.to_string(), "unknown error correction level \"Z\"");
}
