//! End-to-end tests for the JSON remapping path
//!
//! These drive the JsonDecoder against real files on disk and check the
//! contract the converted output has to honor: one record per input element,
//! no nulls, stable values when re-applied to canonical data.

use bookport_core::decoder::{decoder_for_extension, Decoder, JsonDecoder};
use bookport_core::writer::{default_output_path, write_records};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, value: &Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn test_remap_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "books_import.json",
        &json!([
            {"seq": 1, "title": "三国演义", "category": "小说", "author": "罗贯中",
             "grade": "五年级", "purchased": true, "read": true, "deepRead": false},
            {"seq": 2, "title": "夏洛的网", "category": "童话", "author": "E.B.怀特",
             "grade": "三年级"}
        ]),
    );

    let records = JsonDecoder::new().decode(&input).unwrap();
    assert_eq!(records.len(), 2);

    let output = dir.path().join("books_converted.json");
    write_records(&records, &output).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let books = written.as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["serial"], 1);
    assert_eq!(books[0]["type"], "小说");
    assert_eq!(books[0]["purchased"], true);
    assert_eq!(books[1]["serial"], 2);
    assert_eq!(books[1]["read"], false);
    assert_eq!(books[1]["cover"], "");
    // non-ASCII stays literal in the file
    assert!(fs::read_to_string(&output).unwrap().contains("夏洛的网"));
}

#[test]
fn test_title_correction_applied() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "in.json",
        &json!([{"seq": 11, "title": "哈里波特与魔法石", "category": "小说"}]),
    );

    let records = JsonDecoder::new().decode(&input).unwrap();
    assert_eq!(records[0].title, "哈利波特与魔法石");
}

#[test]
fn test_missing_title_still_yields_empty_string() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.json", &json!([{"seq": 5, "category": "科普"}]));

    let records = JsonDecoder::new().decode(&input).unwrap();
    assert_eq!(records[0].title, "");
    assert_eq!(records[0].grade_level, "");
}

#[test]
fn test_output_order_matches_input_order() {
    let dir = TempDir::new().unwrap();
    let items: Vec<Value> = (1..=30)
        .map(|i| json!({"seq": i, "title": format!("book {i}")}))
        .collect();
    let input = write_input(&dir, "in.json", &Value::Array(items));

    let records = JsonDecoder::new().decode(&input).unwrap();
    assert_eq!(records.len(), 30);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.serial, i as u32 + 1);
    }
}

#[test]
fn test_remap_is_idempotent_on_own_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "in.json",
        &json!([
            {"seq": 11, "title": "哈里波特与魔法石", "category": "小说",
             "grade": "五年级", "publisher": "人文社"},
            {"seq": 12, "title": "昆虫记", "category": "科普", "grade": "四年级"}
        ]),
    );

    let first = JsonDecoder::new().decode(&input).unwrap();
    let output = dir.path().join("out.json");
    write_records(&first, &output).unwrap();

    let second = JsonDecoder::new().decode(&output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_nonexistent_input_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.json");

    assert!(JsonDecoder::new().decode(&input).is_err());
    assert!(!default_output_path(&input).exists());
}

#[test]
fn test_malformed_json_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "[{\"seq\": 1,").unwrap();

    assert!(JsonDecoder::new().decode(&input).is_err());
}

#[test]
fn test_top_level_object_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obj.json", &json!({"seq": 1}));

    assert!(JsonDecoder::new().decode(&input).is_err());
}

#[test]
fn test_decoder_lookup_by_extension() {
    assert!(decoder_for_extension("json").is_some());
    assert!(decoder_for_extension("xlsx").is_some());
    assert!(decoder_for_extension("XLS").is_some());
    assert!(decoder_for_extension("csv").is_none());
}
