use image::{Rgba, RgbaImage};

use super::*;
use crate::compose::compositor::LayoutOpts;

struct Fixture {
    root: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("out")).unwrap();
        std::fs::create_dir(root.path().join("posters")).unwrap();
        RgbaImage::from_pixel(60, 60, Rgba([255, 255, 255, 255]))
            .save(root.path().join("template.png"))
            .unwrap();
        RgbaImage::from_pixel(20, 20, Rgba([0, 128, 0, 255]))
            .save(root.path().join("posters").join("a.png"))
            .unwrap();
        Self { root }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    fn workspace(&self) -> Workspace {
        Workspace::new(self.path("state"))
    }

    fn request(&self) -> SetupRequest {
        SetupRequest {
            template_path: self.path("template.png"),
            output_root: self.path("out"),
            start_color: "#000000".to_owned(),
            end_color: "#ffffff".to_owned(),
            border_thickness: "2".to_owned(),
        }
    }
}

fn small_layout() -> BatchOpts {
    BatchOpts {
        layout: LayoutOpts {
            target_width: 20,
            ..LayoutOpts::default()
        },
        ..BatchOpts::default()
    }
}

fn date() -> DateLabel {
    DateLabel::parse("2024-05-01").unwrap()
}

#[test]
fn fresh_workspace_needs_setup() {
    let f = Fixture::new();
    assert_eq!(Session::resume(&f.workspace()).unwrap(), Session::NeedsSetup);
}

#[test]
fn running_before_setup_is_a_config_error() {
    let f = Fixture::new();
    let err = Session::NeedsSetup
        .run_batch(&f.path("posters"), date(), &small_layout(), &CancelToken::new())
        .unwrap_err();
    assert!(matches!(err, AutodesignError::Config(_)));
}

#[test]
fn configure_persists_and_resumes() {
    let f = Fixture::new();
    let ws = f.workspace();
    let mut session = Session::NeedsSetup;
    session.configure(&f.request(), Some(&ws)).unwrap();

    let ready = session.ready().unwrap();
    assert_eq!(ready.template_path, ws.template_path());
    assert_eq!(ready.config.border_thickness_px, 2);

    assert_eq!(Session::resume(&ws).unwrap(), session);
}

#[test]
fn failed_configure_leaves_session_unchanged() {
    let f = Fixture::new();
    let mut req = f.request();
    req.start_color = "red".to_owned();

    let mut session = Session::NeedsSetup;
    assert!(session.configure(&req, Some(&f.workspace())).is_err());
    assert_eq!(session, Session::NeedsSetup);
    assert!(!f.workspace().is_configured());
}

#[test]
fn ready_session_runs_a_batch() {
    let f = Fixture::new();
    let mut session = Session::NeedsSetup;
    session.configure(&f.request(), None).unwrap();

    let report = session
        .run_batch(&f.path("posters"), date(), &small_layout(), &CancelToken::new())
        .unwrap();
    assert_eq!(report.succeeded(), 1);

    let out = f.path("out").join("2024-05-01").join("a.png");
    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (60, 60));
    // Frame 24x24 centered at (18, 18); poster starts at (20, 20).
    assert_eq!(*img.get_pixel(18, 18), Rgba([0, 0, 0, 255]));
    assert_eq!(*img.get_pixel(30, 30), Rgba([0, 128, 0, 255]));
    assert_eq!(*img.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
}

#[test]
fn missing_posters_folder_fails_before_touching_output() {
    let f = Fixture::new();
    let mut session = Session::NeedsSetup;
    session.configure(&f.request(), None).unwrap();

    let err = session
        .run_batch(&f.path("nope"), date(), &small_layout(), &CancelToken::new())
        .unwrap_err();
    assert!(matches!(err, AutodesignError::SourceImage(_)));
    assert!(!f.path("out").join("2024-05-01").exists());
}

#[test]
fn reset_returns_to_setup() {
    let f = Fixture::new();
    let ws = f.workspace();
    let mut session = Session::NeedsSetup;
    session.configure(&f.request(), Some(&ws)).unwrap();

    session.reset(Some(&ws)).unwrap();
    assert_eq!(session, Session::NeedsSetup);
    assert_eq!(Session::resume(&ws).unwrap(), Session::NeedsSetup);
}
