use super::*;

struct Fixture {
    _dir: tempfile::TempDir,
    template: PathBuf,
    out: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template.png");
    std::fs::write(&template, b"not decoded during setup").unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();
    Fixture {
        template,
        out,
        _dir: dir,
    }
}

fn request(f: &Fixture) -> SetupRequest {
    SetupRequest {
        template_path: f.template.clone(),
        output_root: f.out.clone(),
        start_color: "#ff0000".to_owned(),
        end_color: "0000FF".to_owned(),
        border_thickness: "5".to_owned(),
    }
}

#[test]
fn valid_request_builds_run_config() {
    let f = fixture();
    let v = request(&f).validate().unwrap();
    assert_eq!(v.template_path, f.template);
    assert_eq!(v.config.output_root, f.out);
    assert_eq!(v.config.start_color, Rgb8::new(255, 0, 0));
    assert_eq!(v.config.end_color, Rgb8::new(0, 0, 255));
    assert_eq!(v.config.border_thickness_px, 5);
}

#[test]
fn missing_paths_get_distinct_messages() {
    let f = fixture();

    let mut r = request(&f);
    r.template_path = f.out.join("nope.png");
    r.output_root = f.out.join("nope");
    let msg = r.validate().unwrap_err().to_string();
    assert!(msg.contains("template file and saving folder"), "{msg}");

    let mut r = request(&f);
    r.template_path = f.out.join("nope.png");
    let msg = r.validate().unwrap_err().to_string();
    assert!(msg.contains("template file") && msg.contains("nope.png"), "{msg}");

    let mut r = request(&f);
    r.output_root = f.out.join("nope");
    let msg = r.validate().unwrap_err().to_string();
    assert!(msg.contains("saving folder"), "{msg}");
}

#[test]
fn template_must_be_a_file_not_a_folder() {
    let f = fixture();
    let mut r = request(&f);
    r.template_path = f.out.clone();
    assert!(matches!(
        r.validate().unwrap_err(),
        AutodesignError::Config(_)
    ));
}

#[test]
fn non_numeric_or_zero_thickness_is_rejected() {
    let f = fixture();
    for bad in ["", "abc", "5px", "-1", "1.5", "0"] {
        let mut r = request(&f);
        r.border_thickness = bad.to_owned();
        let err = r.validate().unwrap_err();
        assert!(
            matches!(err, AutodesignError::InvalidParameter(_)),
            "{bad}: {err}"
        );
    }
}

#[test]
fn bad_hex_colors_are_rejected() {
    let f = fixture();
    let mut r = request(&f);
    r.end_color = "#12345".to_owned();
    let err = r.validate().unwrap_err();
    assert!(matches!(err, AutodesignError::InvalidParameter(_)));
    assert!(err.to_string().contains("HEX"));
}
