use std::str::FromStr;

use crate::*;

#[test]
fn test_severity_ordering() {
    assert!(Severity::None < Severity::Error);
    assert!(Severity::Error < Severity::Info);
    assert!(Severity::Info < Severity::Debug);
}

#[test]
fn test_severity_ordinal_round_trip() {
    for v in 0..=3 {
        let s = Severity::from_ordinal(v).expect("in range");
        assert_eq!(s.ordinal() as i32, v);
    }
    assert!(Severity::from_ordinal(-1).is_none());
    assert!(Severity::from_ordinal(4).is_none());
    assert!(Severity::from_ordinal(99).is_none());
}

#[test]
fn test_severity_from_str() {
    assert_eq!(Severity::from_str("debug"), Ok(Severity::Debug));
    assert_eq!(Severity::from_str("ERROR"), Ok(Severity::Error));
    assert_eq!(Severity::from_str("Info"), Ok(Severity::Info));
    assert_eq!(Severity::from_str("none"), Ok(Severity::None));
    assert_eq!(Severity::from_str("2"), Ok(Severity::Info));
    assert!(Severity::from_str("verbose").is_err());
    assert!(Severity::from_str("5").is_err());
    assert!(Severity::from_str("").is_err());
}

#[test]
fn test_severity_names() {
    assert_eq!(Severity::Debug.name(), "DEBUG");
    assert_eq!(Severity::None.name(), "NONE");
    assert_eq!(format!("{}", Severity::Error), "ERROR");
}

#[test]
fn test_init_error_display() {
    let e = InitError::InvalidLevel(42);
    assert_eq!(e.to_string(), "invalid log level 42 (valid range 0-3)");
}
