use apex::events::UnitKind;
use apex::scorer::parsers::{parse_inches, parse_measurement, parse_mile, parse_reps, parse_seconds};
use rstest::rstest;

#[rstest]
#[case("4.85", 4.85)]
#[case("5.0", 5.0)]
#[case(".9", 0.9)]
#[case("10.", 10.0)]
fn test_seconds_valid(#[case] text: &str, #[case] expected: f64) {
    let m = parse_seconds(text);
    assert!(m.valid, "'{}' should parse", text);
    assert!((m.magnitude - expected).abs() < 1e-9);
}

#[rstest]
#[case("")]
#[case("5")] // still typing
#[case("4.8s")]
#[case("4..8")]
#[case(".")]
#[case("inf.")]
#[case("-4.5")]
#[case("+4.5")]
#[case("4.5e0")]
fn test_seconds_invalid(#[case] text: &str) {
    let m = parse_seconds(text);
    assert!(!m.valid, "'{}' should not parse", text);
    assert_eq!(m.magnitude, 0.0);
}

#[rstest]
#[case("32", 32.0)]
#[case("32\"", 32.0)]
#[case("9'6\"", 114.0)]
#[case("9'6", 114.0)]
#[case("9'", 108.0)]
#[case("65'0\"", 780.0)]
#[case("65\u{2019}0\u{201D}", 780.0)] // curly quotes from phone keyboards
#[case("12\u{2032}3\u{2033}", 147.0)]
#[case("0", 0.0)]
fn test_inches_valid(#[case] text: &str, #[case] expected: f64) {
    let m = parse_inches(text);
    assert!(m.valid, "'{}' should parse", text);
    assert_eq!(m.magnitude, expected);
}

#[rstest]
#[case("")]
#[case("'")]
#[case("9'6'")]
#[case("9 ft")]
#[case("-3")]
#[case("9'x\"")]
#[case("32.5")]
#[case(" 32")]
fn test_inches_invalid(#[case] text: &str) {
    assert!(!parse_inches(text).valid, "'{}' should not parse", text);
}

#[rstest]
#[case("0", Some(0.0))]
#[case("7", Some(7.0))]
#[case("42", Some(42.0))]
#[case("07", Some(7.0))]
#[case("100", None)]
#[case("12a", None)]
#[case("-1", None)]
#[case("", None)]
#[case("+5", None)]
fn test_reps(#[case] text: &str, #[case] expected: Option<f64>) {
    let m = parse_reps(text);
    match expected {
        Some(v) => {
            assert!(m.valid);
            assert_eq!(m.magnitude, v);
        }
        None => assert!(!m.valid, "'{}' should not parse", text),
    }
}

#[rstest]
#[case("7:30", Some(450.0))]
#[case("4:00", Some(240.0))]
#[case("10:06", Some(606.0))]
#[case("0:59", Some(59.0))]
#[case("6:5", Some(365.0))]
#[case("7:60", None)]
#[case("730", None)]
#[case("7:30:00", None)]
#[case(":30", None)]
#[case("7:", None)]
#[case("7.5:00", None)]
#[case("", None)]
fn test_mile(#[case] text: &str, #[case] expected: Option<f64>) {
    let m = parse_mile(text);
    match expected {
        Some(v) => {
            assert!(m.valid, "'{}' should parse", text);
            assert_eq!(m.magnitude, v);
        }
        None => assert!(!m.valid, "'{}' should not parse", text),
    }
}

#[test]
fn test_measurement_dispatches_on_unit() {
    assert_eq!(parse_measurement(UnitKind::Seconds, "4.21").magnitude, 4.21);
    assert_eq!(parse_measurement(UnitKind::Inches, "9'6\"").magnitude, 114.0);
    assert_eq!(parse_measurement(UnitKind::Reps, "25").magnitude, 25.0);
    assert_eq!(parse_measurement(UnitKind::MileSeconds, "6:15").magnitude, 375.0);
    // Same text, different unit: "25" is not a time.
    assert!(!parse_measurement(UnitKind::Seconds, "25").valid);
}
