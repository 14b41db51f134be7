mod common;

use kmp_version_check::{
    error::CheckError,
    manifest::{Manifest, ManifestKeyboard},
};

use common::{TestWorkspace, manifest_json};

#[test]
fn keyboards_keep_document_order_and_duplicates() {
    let manifest: Manifest = manifest_json(&[("b", "1.0"), ("a", "2.0"), ("b", "3.0")])
        .parse()
        .expect("parse manifest");
    let ids = manifest
        .keyboards
        .iter()
        .map(|k| k.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["b", "a", "b"]);
}

#[test]
fn extra_keyboard_fields_are_ignored() {
    let raw = r#"{
        "system": {"keymanDeveloperVersion": "16.0", "fileVersion": "7.0"},
        "keyboards": [{
            "name": "Sample",
            "id": "sil_sample",
            "version": "1.3",
            "languages": [{"name": "English", "id": "en"}]
        }]
    }"#;
    let manifest: Manifest = raw.parse().expect("parse manifest");
    assert_eq!(
        manifest.keyboards,
        vec![ManifestKeyboard {
            id: "sil_sample".into(),
            version: Some("1.3".into()),
        }]
    );
    assert_eq!(manifest.package_name(), None);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = "{\"keyboards\": [".parse::<Manifest>().expect_err("should fail");
    assert!(matches!(err, CheckError::ManifestParse(_)));
    assert_eq!(err.to_string(), "Invalid JSON file. Exiting");
}

#[test]
fn keyboards_must_be_an_array() {
    let err = r#"{"keyboards": {"id": "kbd1"}}"#
        .parse::<Manifest>()
        .expect_err("should fail");
    assert!(matches!(err, CheckError::ManifestSchema(_)));
}

#[test]
fn top_level_must_be_an_object() {
    let err = "[1, 2]".parse::<Manifest>().expect_err("should fail");
    assert!(matches!(err, CheckError::ManifestSchema(_)));
}

#[test]
fn entry_without_id_names_its_position() {
    let err = r#"{"keyboards": [{"id": "kbd1", "version": "1.0"}, {"version": "1.0"}]}"#
        .parse::<Manifest>()
        .expect_err("should fail");
    assert!(err.to_string().contains("keyboards[1]"));
}

#[test]
fn numeric_version_is_rejected() {
    let err = r#"{"keyboards": [{"id": "kbd1", "version": 1.0}]}"#
        .parse::<Manifest>()
        .expect_err("should fail");
    assert!(matches!(err, CheckError::ManifestSchema(_)));
}

#[test]
fn load_reads_manifest_from_disk() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("kmp.json", &manifest_json(&[("kbd1", "1.0")]));
    let manifest = Manifest::load(&path).expect("load manifest");
    assert_eq!(manifest.keyboards.len(), 1);
}

#[test]
fn load_of_missing_file_is_an_io_error() {
    let workspace = TestWorkspace::new();
    let err = Manifest::load(&workspace.path().join("kmp.json")).expect_err("should fail");
    assert!(matches!(err, CheckError::Io { .. }));
}
