use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(Rgb8::from_hex("#ff8000").unwrap(), Rgb8::new(255, 128, 0));
    assert_eq!(Rgb8::from_hex("00FF7f").unwrap(), Rgb8::new(0, 255, 127));
    assert_eq!(" #0a0b0c ".parse::<Rgb8>().unwrap(), Rgb8::new(10, 11, 12));
}

#[test]
fn hex_rejects_bad_shapes() {
    for bad in ["", "#fff", "#ff00zz", "#ff000000", "+f+f+f", "#ffé000"] {
        let err = Rgb8::from_hex(bad).unwrap_err();
        assert!(
            matches!(err, AutodesignError::InvalidParameter(_)),
            "{bad}: {err}"
        );
    }
}

#[test]
fn hex_round_trips_through_formatting() {
    let c = Rgb8::new(1, 171, 255);
    assert_eq!(c.to_hex(), "#01abff");
    assert_eq!(Rgb8::from_hex(&c.to_hex()).unwrap(), c);
}

#[test]
fn color_serializes_as_array() {
    let json = serde_json::to_string(&Rgb8::new(1, 2, 3)).unwrap();
    assert_eq!(json, "[1,2,3]");

    let c: Rgb8 = serde_json::from_str("[255, 0, 9]").unwrap();
    assert_eq!(c, Rgb8::new(255, 0, 9));

    assert!(serde_json::from_str::<Rgb8>("[256, 0, 0]").is_err());
    assert!(serde_json::from_str::<Rgb8>("[1, 2]").is_err());
}

#[test]
fn border_spec_rejects_zero_thickness() {
    let err = BorderSpec::new(Rgb8::BLACK, Rgb8::WHITE, 0).unwrap_err();
    assert!(matches!(err, AutodesignError::InvalidParameter(_)));
    assert!(BorderSpec::new(Rgb8::BLACK, Rgb8::WHITE, 1).is_ok());
}
