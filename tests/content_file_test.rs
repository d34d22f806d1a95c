// Integration tests for loading content bundles from disk

mod common;

use std::io::Write;

use physioconnect::app::App;
use physioconnect::config::AppConfig;
use physioconnect::content::Content;
use physioconnect::error::PhysioError;
use physioconnect::traits::ContentSource;
use serde_json::Value;
use tempfile::NamedTempFile;

fn embedded_json() -> Value {
    serde_json::from_str(include_str!("../assets/content.json")).unwrap()
}

fn write_temp(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_modified_bundle() {
    let mut json = embedded_json();
    json["therapists"][0]["name"] = Value::from("Dr. Test Person");
    let file = write_temp(&json.to_string());

    let content = Content::load(file.path()).unwrap();
    assert_eq!(content.therapists()[0].name, "Dr. Test Person");
    assert_eq!(
        content.exercises().len(),
        Content::embedded().unwrap().exercises().len()
    );
}

#[test]
fn test_optional_sections_default() {
    let mut json = embedded_json();
    let obj = json.as_object_mut().unwrap();
    obj.remove("article_body");
    obj.remove("default_bookmarks");
    let file = write_temp(&json.to_string());

    let content = Content::load(file.path()).unwrap();
    assert!(content.article_body().is_empty());
    assert!(content.default_bookmarks().is_empty());
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let file = write_temp("{ not json");
    let err = Content::load(file.path()).unwrap_err();
    assert!(matches!(err, PhysioError::ContentParse { .. }));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Content::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PhysioError::ContentIo { .. }));
}

#[test]
fn test_load_or_embedded_without_path() {
    let content = Content::load_or_embedded(None).unwrap();
    assert!(!content.therapists().is_empty());
}

#[test]
fn test_app_runs_on_loaded_bundle() {
    let mut json = embedded_json();
    json["user_profile"]["name"] = Value::from("Robin Vale");
    let file = write_temp(&json.to_string());

    let content = Content::load(file.path()).unwrap();
    let app = App::new(
        AppConfig::default().with_start_screen(physioconnect::app::ScreenId::Home),
        Box::new(content),
    );
    let screen = common::render_to_string(&app, 100, 30);
    assert!(screen.contains("Welcome back, Robin"));
}
