//! Text → scalar coercion for every type tag.
#![allow(clippy::approx_constant)]

use chrono::{DateTime, Datelike, Timelike};
use ted_core::{coerce_scalar, Scalar, TedError, ValueKind};

fn coerce(text: &str, tag: &str) -> ted_core::Result<Scalar> {
    coerce_scalar(text, tag.parse()?)
}

// ============================================================================
// 1. Strings
// ============================================================================

#[test]
fn string_is_verbatim() {
    for text in ["", "hello", "  spaced  ", "42", "true", "a=b.c"] {
        assert_eq!(coerce(text, "s").unwrap(), Scalar::String(text.to_string()));
    }
}

#[test]
fn default_kind_is_string() {
    assert_eq!(ValueKind::default(), ValueKind::String);
}

// ============================================================================
// 2. Booleans
// ============================================================================

#[test]
fn bool_true_tokens() {
    for text in ["t", "true", "yes", "y", "T", "TRUE", "Yes", "Y"] {
        assert_eq!(coerce(text, "bool").unwrap(), Scalar::Bool(true), "{text}");
    }
}

#[test]
fn bool_false_tokens() {
    for text in ["f", "false", "no", "n", "F", "False", "NO", "N"] {
        assert_eq!(coerce(text, "b").unwrap(), Scalar::Bool(false), "{text}");
    }
}

#[test]
fn bool_rejects_other_text() {
    for text in ["3", "1", "0", "on", "off", "", "yess"] {
        let err = coerce(text, "bool").unwrap_err();
        assert!(
            matches!(err, TedError::InvalidTypeValue { text: ref t, kind: "bool" } if t == text),
            "{text}"
        );
    }
}

// ============================================================================
// 3. Integers
// ============================================================================

#[test]
fn int_parses_signed() {
    assert_eq!(coerce("42", "int").unwrap(), Scalar::Int(42));
    assert_eq!(coerce("-17", "i").unwrap(), Scalar::Int(-17));
    assert_eq!(
        coerce("-9223372036854775808", "int").unwrap(),
        Scalar::Int(i64::MIN)
    );
}

#[test]
fn int_rejects_non_numeric() {
    for text in ["nope", "3.5", "", "0x10", "9223372036854775808"] {
        assert!(
            matches!(coerce(text, "int"), Err(TedError::InvalidTypeValue { kind: "int", .. })),
            "{text}"
        );
    }
}

#[test]
fn uint_parses_unsigned() {
    assert_eq!(coerce("0", "uint").unwrap(), Scalar::UInt(0));
    assert_eq!(
        coerce("18446744073709551615", "u").unwrap(),
        Scalar::UInt(u64::MAX)
    );
}

#[test]
fn int_accepts_explicit_plus() {
    assert_eq!(coerce("+5", "int").unwrap(), Scalar::Int(5));
}

#[test]
fn uint_rejects_any_sign() {
    for text in ["+5", "+0", "-0"] {
        assert!(
            matches!(coerce(text, "uint"), Err(TedError::InvalidTypeValue { kind: "uint", .. })),
            "{text}"
        );
    }
}

#[test]
fn uint_rejects_negative() {
    assert!(matches!(
        coerce("-1", "uint"),
        Err(TedError::InvalidTypeValue { kind: "uint", .. })
    ));
}

// ============================================================================
// 4. Floats
// ============================================================================

#[test]
fn float_parses_decimal_and_exponent() {
    assert_eq!(coerce("3.14", "float").unwrap(), Scalar::Float(3.14));
    assert_eq!(coerce("3", "f").unwrap(), Scalar::Float(3.0));
    assert_eq!(coerce("-2.5e3", "float").unwrap(), Scalar::Float(-2500.0));
}

#[test]
fn float_rejects_words() {
    assert!(matches!(
        coerce("pi", "float"),
        Err(TedError::InvalidTypeValue { kind: "float", .. })
    ));
}

// ============================================================================
// 5. Timestamps
// ============================================================================

#[test]
fn time_parses_rfc3339() {
    let Scalar::Timestamp(ts) = coerce("2020-01-02T03:04:05Z", "time").unwrap() else {
        panic!("expected timestamp");
    };
    assert_eq!((ts.year(), ts.month(), ts.day()), (2020, 1, 2));
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (3, 4, 5));
}

#[test]
fn time_keeps_offset_and_fraction() {
    let expected = DateTime::parse_from_rfc3339("2021-06-30T23:59:59.25+05:30").unwrap();
    for tag in ["t", "time", "timestamp"] {
        assert_eq!(
            coerce("2021-06-30T23:59:59.25+05:30", tag).unwrap(),
            Scalar::Timestamp(expected)
        );
    }
}

#[test]
fn time_rejects_loose_separators() {
    for text in [
        "2020-01-02 03:04:05Z",
        "2020-01-02t03:04:05Z",
        "2020-01-02T03:04:05z",
        "2020-01-02t03:04:05z",
        "2020-01-02T03:04:05+0000",
        "2020-01-02T03:04Z",
    ] {
        assert!(
            matches!(coerce(text, "time"), Err(TedError::InvalidTypeValue { kind: "time", .. })),
            "{text}"
        );
    }
}

#[test]
fn time_rejects_out_of_range_fields() {
    assert!(coerce("2020-13-02T03:04:05Z", "t").is_err());
    assert!(coerce("2020-01-02T25:04:05Z", "t").is_err());
}

#[test]
fn time_rejects_plain_date() {
    assert!(matches!(
        coerce("2020-01-02", "time"),
        Err(TedError::InvalidTypeValue { kind: "time", .. })
    ));
}

// ============================================================================
// 6. Tags
// ============================================================================

#[test]
fn unknown_tag_is_error() {
    assert!(matches!(
        coerce("1", "integer"),
        Err(TedError::UnknownTypeTag(ref t)) if t == "integer"
    ));
}

#[test]
fn error_message_names_text_and_kind() {
    let err = coerce("maybe", "bool").unwrap_err();
    assert_eq!(err.to_string(), "'maybe' could not be interpreted as bool");
}
