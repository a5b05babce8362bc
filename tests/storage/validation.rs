//! Load rejects anything that does not match the record schema, and a
//! rejected save never touches the file.

use crate::common::*;

fn load_parts_error(repo: &TestRepo, contents: &str) -> SchemaError {
    repo.write("data/master/parts.json", contents);
    let err = JsonMasterDataStore::new(repo.root())
        .load_parts()
        .unwrap_err();
    err.as_schema()
        .cloned()
        .unwrap_or_else(|| panic!("expected schema error, got {:?}", err))
}

#[test]
fn top_level_must_be_list() {
    let repo = TestRepo::new();
    let err = load_parts_error(&repo, "{}");
    assert_eq!(err.location(), Some("payload"));
    assert!(err.to_string().ends_with("payload expected list, got object"));
}

#[test]
fn element_must_be_object() {
    let repo = TestRepo::new();
    let err = load_parts_error(&repo, "[42]");
    assert_eq!(err.location(), Some("item 0"));
}

#[test]
fn unexpected_field_rejected() {
    let repo = TestRepo::new();
    let err = load_parts_error(
        &repo,
        r#"[{"id": "p1", "name": "n", "categoryId": "c", "manufacturerId": "m", "drawerId": "d", "tags": [], "quantity": 1, "colour": "red"}]"#,
    );
    assert!(err.to_string().contains("unexpected field 'colour'"));
}

#[test]
fn missing_required_field_rejected() {
    let repo = TestRepo::new();
    let err = load_parts_error(
        &repo,
        r#"[{"id": "p1", "name": "n", "categoryId": "c", "manufacturerId": "m", "drawerId": "d", "tags": []}]"#,
    );
    assert!(err.to_string().contains("missing required field 'quantity'"));
}

#[test]
fn boolean_is_not_an_integer() {
    let repo = TestRepo::new();
    let err = load_parts_error(
        &repo,
        r#"[{"id": "p1", "name": "n", "categoryId": "c", "manufacturerId": "m", "drawerId": "d", "tags": [], "quantity": true}]"#,
    );
    assert_eq!(err.location(), Some("item 0 field 'quantity'"));
    assert!(err.to_string().contains("expected integer, got boolean"));
}

#[test]
fn non_string_tag_reports_index() {
    let repo = TestRepo::new();
    let err = load_parts_error(
        &repo,
        r#"[{"id": "p1", "name": "n", "categoryId": "c", "manufacturerId": "m", "drawerId": "d", "tags": ["ok", 7], "quantity": 1}]"#,
    );
    assert_eq!(err.location(), Some("item 0 field 'tags'[1]"));
}

#[test]
fn nested_pixel_range_checked() {
    let repo = TestRepo::new();
    repo.write(
        "data/master/drawers.json",
        r#"[{"id": "d1", "rackId": "r1", "row": 0, "col": 0, "label": "A1", "pixelRange": {"start": "0", "count": 3}}]"#,
    );
    let err = JsonMasterDataStore::new(repo.root())
        .load_drawers()
        .unwrap_err();
    assert_eq!(
        err.as_schema().and_then(|e| e.location()),
        Some("item 0 field 'pixelRange' field 'start'")
    );
}

#[test]
fn malformed_json_names_file() {
    let repo = TestRepo::new();
    let path = repo.write("data/master/tags.json", "[{\"id\": \"t1\",");
    let err = JsonMasterDataStore::new(repo.root()).load_tags().unwrap_err();
    match err {
        Error::Schema(SchemaError::MalformedJson { file, .. }) => {
            assert_eq!(file, path.display().to_string())
        }
        other => panic!("expected malformed JSON, got {:?}", other),
    }
}

#[test]
fn missing_file_is_not_an_empty_collection() {
    let repo = TestRepo::new();
    let err = JsonMasterDataStore::new(repo.root()).load_parts().unwrap_err();
    assert!(err.is_missing_file());
}

#[test]
fn unicode_survives_save() {
    let repo = TestRepo::new();
    let store = JsonMasterDataStore::new(repo.root());
    store
        .save_categories(&[Category {
            id: "cat-µ".to_string(),
            name: "Microcontrôleurs ⚡".to_string(),
        }])
        .unwrap();
    let text = repo.read("data/master/categories.json");
    assert!(text.contains("\"Microcontrôleurs ⚡\""));
    assert!(text.ends_with("]\n"));
}
