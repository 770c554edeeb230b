//! Loading page data from disk and feeding it to the widget.

use super::common::{sample_site, urls};
use pagesift::{
    build_index, load_pages, load_pages_from_path, search, PageDataError, PageRecord,
};
use std::fs;
use tempfile::TempDir;

fn write_pages(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("pages.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_load_from_file_and_search() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::to_string(&sample_site()).unwrap();
    let path = write_pages(&dir, &json);

    let pages = load_pages_from_path(&path).unwrap();
    assert_eq!(pages, sample_site());

    let index = build_index(pages);
    assert_eq!(
        urls(&search(&index, "dessert")),
        vec!["/a", "/recipes/banana-bread"]
    );
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let err = load_pages_from_path(&path).unwrap_err();
    assert!(matches!(err, PageDataError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_bad_record_reports_index() {
    let dir = TempDir::new().unwrap();
    let path = write_pages(
        &dir,
        r#"[
            {"url": "/a", "title": "A", "content": "a"},
            {"url": "/b", "title": "B", "content": "b"},
            {"url": "/c", "content": "no title"}
        ]"#,
    );

    match load_pages_from_path(&path) {
        Err(PageDataError::Record { index, .. }) => assert_eq!(index, 2),
        other => panic!("expected a record error, got {:?}", other),
    }
}

#[test]
fn test_wrong_field_type_is_rejected() {
    let err = load_pages(r#"[{"url": "/a", "title": 7, "content": "a"}]"#).unwrap_err();
    assert!(matches!(err, PageDataError::Record { index: 0, .. }));
}

#[test]
fn test_non_array_is_rejected() {
    assert!(matches!(
        load_pages(r#"{"pages": []}"#),
        Err(PageDataError::NotAnArray)
    ));
    assert!(matches!(load_pages("[1, 2"), Err(PageDataError::Json(_))));
}

#[test]
fn test_null_and_empty_mean_no_pages() {
    assert!(load_pages("null").unwrap().is_empty());
    assert!(load_pages("[]").unwrap().is_empty());

    let index = build_index(Vec::<PageRecord>::new());
    assert!(search(&index, "anything").is_empty());
}

#[test]
fn test_null_keywords_are_absent() {
    let pages =
        load_pages(r#"[{"url": "/a", "title": "A", "content": "a", "keywords": null}]"#).unwrap();
    assert_eq!(pages[0].keywords, None);
    assert!(pages[0].keyword_list().is_empty());
}
