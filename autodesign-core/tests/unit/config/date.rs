use super::*;

#[test]
fn parses_and_formats_canonical_labels() {
    let d = DateLabel::parse("2024-03-09").unwrap();
    assert_eq!(d.date(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    assert_eq!(d.to_string(), "2024-03-09");
}

#[test]
fn rejects_impossible_or_non_canonical_dates() {
    for bad in ["2024-02-30", "2023-13-01", "2024-3-9", "09-03-2024", "yesterday", ""] {
        let err = DateLabel::parse(bad).unwrap_err();
        assert!(
            matches!(err, AutodesignError::InvalidParameter(_)),
            "{bad}: {err}"
        );
    }
}

#[test]
fn leap_day_is_accepted() {
    assert_eq!(
        "2024-02-29".parse::<DateLabel>().unwrap().to_string(),
        "2024-02-29"
    );
}

#[test]
fn today_formats_as_label() {
    let s = DateLabel::today().to_string();
    assert_eq!(s.len(), 10);
    DateLabel::parse(&s).unwrap();
}
