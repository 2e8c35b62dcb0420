#![cfg(feature = "serde")]
//! Loading passage bounds from configuration at startup.

use quire::{LengthUnit, PassageBounds};

#[test]
fn bounds_deserialize_from_json() {
    let bounds: PassageBounds =
        serde_json::from_str(r#"{ "min_length": 200, "max_length": 400 }"#).unwrap();

    assert_eq!(bounds.min_length(), 200);
    assert_eq!(bounds.max_length(), 400);
    assert_eq!(bounds.unit(), LengthUnit::Chars);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let bounds: PassageBounds = serde_json::from_str(r#"{ "unit": "graphemes" }"#).unwrap();

    assert_eq!(bounds, PassageBounds::default().with_unit(LengthUnit::Graphemes));
}

#[test]
fn invalid_bounds_rejected() {
    let err = serde_json::from_str::<PassageBounds>(r#"{ "min_length": 900, "max_length": 100 }"#)
        .unwrap_err();
    assert!(err.to_string().contains("exceeds max length"), "{err}");

    assert!(serde_json::from_str::<PassageBounds>(r#"{ "min_length": 0 }"#).is_err());
}

#[test]
fn bounds_round_trip() {
    let bounds = PassageBounds::new(300, 700).unwrap();
    let json = serde_json::to_string(&bounds).unwrap();
    assert_eq!(serde_json::from_str::<PassageBounds>(&json).unwrap(), bounds);
}
