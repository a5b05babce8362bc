//! Failed create/update/delete leave the collection file byte-identical,
//! successful ones keep every other record in place.

use crate::common::*;
use proptest::prelude::*;

const PARTS_PATH: &str = "data/master/parts.json";

#[test]
fn create_duplicate_leaves_file_unchanged() {
    let repo = TestRepo::new();
    repo.seed_all();

    let err = repo.master().create_part(part("part-2", 1)).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.to_string(), "Part with id 'part-2' already exists");
    assert_eq!(repo.read(PARTS_PATH), PARTS);
}

#[test]
fn update_missing_leaves_file_unchanged() {
    let repo = TestRepo::new();
    repo.seed_all();

    let err = repo.master().update_part(part("part-9", 1)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(repo.read(PARTS_PATH), PARTS);
}

#[test]
fn delete_missing_leaves_file_unchanged() {
    let repo = TestRepo::new();
    repo.seed_all();

    let err = repo.master().delete_part("part-9").unwrap_err();
    assert_eq!(err.to_string(), "Part with id 'part-9' not found");
    assert_eq!(repo.read(PARTS_PATH), PARTS);
}

#[test]
fn index_errors_use_foreign_key() {
    let repo = TestRepo::new();
    repo.seed_all();

    let err = repo.indexes().get_parts_by_drawer("drawer-z").unwrap_err();
    assert_eq!(err.to_string(), "Parts by drawer with id 'drawer-z' not found");
    assert_eq!(
        repo.read("data/indexes/parts_by_drawer.json"),
        PARTS_BY_DRAWER
    );
}

#[test]
fn invalid_existing_file_blocks_mutation() {
    let repo = TestRepo::new();
    let broken = r#"[{"id": "t1", "name": "x", "extra": 1}]"#;
    repo.write("data/master/tags.json", broken);

    let err = repo
        .master()
        .create_tag(Tag {
            id: "t2".to_string(),
            name: "y".to_string(),
        })
        .unwrap_err();
    assert!(err.as_schema().is_some());
    assert_eq!(repo.read("data/master/tags.json"), broken);
}

#[test]
fn update_in_place_keeps_other_bytes() {
    let repo = TestRepo::new();
    repo.seed_all();
    let service = repo.master();

    let mut part3 = service.get_part("part-3").unwrap();
    part3.quantity = 6;
    service.update_part(part3).unwrap();

    let expected = PARTS.replace("\"quantity\": 5\n", "\"quantity\": 6\n");
    assert_eq!(repo.read(PARTS_PATH), expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_update_preserves_file_order(
        count in 1usize..12,
        pick in 0usize..12,
        qty in -50i64..500,
    ) {
        let repo = TestRepo::new();
        let service = repo.master();
        let parts: Vec<Part> = (0..count).map(|i| part(&format!("p{:02}", i), i as i64)).collect();
        service.store().save_parts(&parts).unwrap();

        let target = format!("p{:02}", pick % count);
        service.update_part(part(&target, qty)).unwrap();

        let after = service.list_parts().unwrap();
        prop_assert_eq!(ids(&after), ids(&parts));
        for (before, now) in parts.iter().zip(after.iter()) {
            if before.id == target {
                prop_assert_eq!(now.quantity, qty);
            } else {
                prop_assert_eq!(before, now);
            }
        }
    }

    #[test]
    fn prop_create_appends_at_end(count in 0usize..12) {
        let repo = TestRepo::new();
        let service = repo.master();
        let parts: Vec<Part> = (0..count).map(|i| part(&format!("p{:02}", i), 1)).collect();
        service.store().save_parts(&parts).unwrap();

        service.create_part(part("new", 1)).unwrap();

        let mut expected = ids(&parts);
        expected.push("new".to_string());
        prop_assert_eq!(ids(&service.list_parts().unwrap()), expected);
    }
}
