use std::io::Write;

use stocklist_core::model::{CategoryId, ProductId, Sex};
use stocklist_core::{CatalogError, Dataset};

const DATASET_JSON: &str = r#"{
  "users": [
    { "id": 1, "name": "Roma", "sex": "m" },
    { "id": 2, "name": "Anna", "sex": "f" }
  ],
  "categories": [
    { "id": 1, "title": "Grocery", "icon": "🍞", "ownerId": 2 },
    { "id": 2, "title": "Drinks", "icon": "🍷", "ownerId": 1 }
  ],
  "products": [
    { "id": 1, "name": "Milk", "categoryId": 2 },
    { "id": 2, "name": "Bread", "categoryId": 1 }
  ]
}"#;

#[test]
fn parses_camel_case_document() {
    let dataset = Dataset::from_json(DATASET_JSON).expect("valid document");

    assert_eq!(dataset.users.len(), 2);
    assert_eq!(dataset.users[1].sex, Sex::Female);
    assert_eq!(dataset.categories[0].owner_id.as_u32(), 2);
    assert_eq!(dataset.products[0].category_id, CategoryId(2));
}

#[test]
fn loads_into_a_browsable_catalog() {
    let catalog = Dataset::from_json(DATASET_JSON)
        .expect("valid document")
        .into_catalog()
        .expect("referentially intact document");

    let milk = &catalog.products()[0];
    assert_eq!(milk.id, ProductId(1));
    assert_eq!(milk.category.title, "Drinks");
    assert_eq!(milk.owner.name, "Roma");
}

#[test]
fn reads_a_dataset_file_from_disk() {
    let mut file =
        tempfile::NamedTempFile::new().expect("create temp dataset file");
    file.write_all(DATASET_JSON.as_bytes())
        .expect("write temp dataset file");

    let dataset =
        Dataset::from_path(file.path()).expect("load dataset from disk");
    assert_eq!(dataset.products.len(), 2);
}

#[test]
fn malformed_json_is_a_dataset_error() {
    let err = Dataset::from_json("{ not json").expect_err("invalid document");
    assert!(matches!(err, CatalogError::Dataset(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope.json");

    let err = Dataset::from_path(&missing).expect_err("file does not exist");
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn dangling_reference_fails_catalog_construction() {
    let json = r#"{
      "users": [],
      "categories": [],
      "products": [{ "id": 1, "name": "Milk", "categoryId": 9 }]
    }"#;

    let err = Dataset::from_json(json)
        .expect("document itself is well-formed")
        .into_catalog()
        .expect_err("category 9 does not exist");

    assert!(matches!(
        err,
        CatalogError::UnknownCategory { category_id, .. }
            if category_id == CategoryId(9)
    ));
}
