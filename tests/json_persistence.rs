use std::fs;

use shape_store::{
    AnyShape, Attributes, IdAllocator, Rectangle, Shape, ShapeError, ShapeKind, ShapeStore, Square,
    StoreConfig, decode_from_json, encode_to_json, factory,
};
use tempfile::TempDir;

fn attributes(pairs: &[(&str, i64)]) -> Attributes {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn sample_rectangles(ids: &IdAllocator) -> Vec<AnyShape> {
    vec![
        factory::create_rectangle(2, 3, 0, 0, Some(1), ids).unwrap(),
        factory::create_rectangle(4, 4, 1, 1, Some(2), ids).unwrap(),
        factory::create_rectangle(5, 1, 2, 2, Some(3), ids).unwrap(),
    ]
}

#[test]
fn test_encode_empty_or_absent_is_empty_array() {
    assert_eq!(encode_to_json(None).unwrap(), "[]");
    assert_eq!(encode_to_json(Some(&[][..])).unwrap(), "[]");
}

#[test]
fn test_decode_empty_or_absent_is_empty_list() {
    assert!(decode_from_json(None).unwrap().is_empty());
    assert!(decode_from_json(Some("")).unwrap().is_empty());
    assert!(decode_from_json(Some("[]")).unwrap().is_empty());
}

#[test]
fn test_encode_decode_round_trip() {
    let list = vec![
        attributes(&[("id", 1), ("width", 10), ("height", 7), ("x", 2), ("y", 8)]),
        attributes(&[("id", -5), ("size", 3)]),
        attributes(&[]),
    ];

    let text = encode_to_json(Some(list.as_slice())).unwrap();
    assert_eq!(decode_from_json(Some(text.as_str())).unwrap(), list);
}

#[test]
fn test_decode_rejects_malformed_text() {
    for text in ["{", "not json", "{\"id\": 1}", "[{\"id\": \"one\"}]", "[{\"id\": 1.5}]"] {
        let result = decode_from_json(Some(text));
        assert!(
            matches!(result, Err(ShapeError::MalformedJson(_))),
            "{:?} should be rejected",
            text
        );
    }
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(dir.path()), &ids);

    assert!(store.load_collection(ShapeKind::Rectangle).unwrap().is_empty());
    assert!(store.load_collection(ShapeKind::Square).unwrap().is_empty());
}

#[test]
fn test_save_then_load_rectangles() {
    let dir = TempDir::new().unwrap();
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(dir.path()), &ids);
    let rectangles = sample_rectangles(&ids);

    store.save_collection(ShapeKind::Rectangle, Some(rectangles.as_slice())).unwrap();
    assert!(dir.path().join("Rectangle.json").exists());

    let loaded = store.load_collection(ShapeKind::Rectangle).unwrap();
    assert_eq!(loaded, rectangles);
    let loaded_ids: Vec<_> = loaded.iter().map(|s| s.id()).collect();
    assert_eq!(loaded_ids, vec![1, 2, 3]);

    // Each rebuilt shape draws one id even though all of them kept their own
    assert_eq!(ids.allocated(), 3);
    let next = factory::create_square(1, 0, 0, None, &ids).unwrap();
    assert_eq!(next.id(), 4);
}

#[test]
fn test_save_absent_collection_writes_empty_array() {
    let dir = TempDir::new().unwrap();
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(dir.path()), &ids);

    store.save_collection(ShapeKind::Square, None).unwrap();

    let text = fs::read_to_string(store.json_path(ShapeKind::Square)).unwrap();
    assert_eq!(text, "[]");
    assert!(store.load_collection(ShapeKind::Square).unwrap().is_empty());
}

#[test]
fn test_save_overwrites_previous_file() {
    let dir = TempDir::new().unwrap();
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(dir.path()), &ids);

    store.save_collection(ShapeKind::Rectangle, Some(sample_rectangles(&ids).as_slice())).unwrap();
    let single = vec![AnyShape::from(Rectangle::new(9, 9, 0, 0, Some(42), &ids).unwrap())];
    store.save_collection(ShapeKind::Rectangle, Some(single.as_slice())).unwrap();

    assert_eq!(store.load_collection(ShapeKind::Rectangle).unwrap(), single);
}

#[test]
fn test_load_assigns_ids_to_id_less_entries() {
    let dir = TempDir::new().unwrap();
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(dir.path()), &ids);
    fs::write(
        store.json_path(ShapeKind::Square),
        r#"[{"size": 2, "x": 1}, {"y": 3, "size": 1, "id": 30}, {"size": 4}]"#,
    )
    .unwrap();

    let loaded = store.load_collection(ShapeKind::Square).unwrap();
    let loaded_ids: Vec<_> = loaded.iter().map(|s| s.id()).collect();
    assert_eq!(loaded_ids, vec![1, 30, 3]);
    assert_eq!(loaded[1].y(), 3);
}

#[test]
fn test_load_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(dir.path()), &ids);
    fs::write(store.json_path(ShapeKind::Rectangle), "[{\"id\": 1,").unwrap();

    let result = store.load_collection(ShapeKind::Rectangle);
    assert!(matches!(result, Err(ShapeError::MalformedJson(_))));
}

#[test]
fn test_save_rejects_other_kinds() {
    let dir = TempDir::new().unwrap();
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(dir.path()), &ids);
    let mixed = vec![
        AnyShape::from(Rectangle::new(1, 1, 0, 0, Some(1), &ids).unwrap()),
        AnyShape::from(Square::new(1, 0, 0, Some(2), &ids).unwrap()),
    ];

    let result = store.save_collection(ShapeKind::Rectangle, Some(mixed.as_slice()));

    assert!(matches!(
        result,
        Err(ShapeError::KindMismatch { expected: "Rectangle", found: "Square" })
    ));
    assert!(!store.json_path(ShapeKind::Rectangle).exists());
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("shapes").join("saved");
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(&nested), &ids);

    store.save_collection(ShapeKind::Rectangle, Some(sample_rectangles(&ids).as_slice())).unwrap();

    assert!(nested.join("Rectangle.json").exists());
}

#[test]
fn test_paths_are_named_after_kind() {
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory("data"), &ids);

    assert_eq!(store.json_path(ShapeKind::Rectangle), std::path::Path::new("data/Rectangle.json"));
    assert_eq!(store.csv_path(ShapeKind::Square), std::path::Path::new("data/Square.csv"));
    assert_eq!(StoreConfig::default().directory(), std::path::Path::new("."));
}

#[test]
fn test_failed_load_draws_no_ids() {
    let dir = TempDir::new().unwrap();
    let ids = IdAllocator::new();
    let store = ShapeStore::with_allocator(StoreConfig::with_directory(dir.path()), &ids);
    fs::write(
        store.json_path(ShapeKind::Square),
        r#"[{"size": 2}, {"size": 3}, {"size": 0}]"#,
    )
    .unwrap();

    let result = store.load_collection(ShapeKind::Square);

    assert!(matches!(result, Err(ShapeError::InvalidDimension { attribute: "size", .. })));
    assert_eq!(ids.allocated(), 0);
}
