use shape_store::{IdAllocator, Rectangle, Shape, Square, factory};

#[test]
fn test_ids_increase_by_one_from_one() {
    let ids = IdAllocator::new();

    let assigned: Vec<_> = (0..5).map(|_| ids.assign(None)).collect();
    assert_eq!(assigned, vec![1, 2, 3, 4, 5]);
    assert_eq!(ids.allocated(), 5);
}

#[test]
fn test_counter_is_shared_across_kinds() {
    let ids = IdAllocator::new();

    let first = Rectangle::new(2, 3, 0, 0, None, &ids).unwrap();
    let second = Square::new(4, 0, 0, None, &ids).unwrap();
    let third = factory::create_rectangle(1, 1, 0, 0, None, &ids).unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
    assert_eq!(third.id(), 3);
}

#[test]
fn test_explicit_ids_are_kept_as_given() {
    let ids = IdAllocator::new();

    // Duplicates and non-positive ids are accepted untouched
    let a = Rectangle::new(1, 1, 0, 0, Some(12), &ids).unwrap();
    let b = Square::new(1, 0, 0, Some(12), &ids).unwrap();
    let c = Square::new(1, 0, 0, Some(-3), &ids).unwrap();
    assert_eq!((a.id(), b.id(), c.id()), (12, 12, -3));

    // None of them touched the counter
    let d = Rectangle::new(1, 1, 0, 0, None, &ids).unwrap();
    assert_eq!(d.id(), 1);
}

#[test]
fn test_separate_allocators_are_independent() {
    let left = IdAllocator::new();
    let right = IdAllocator::new();

    left.next_id();
    left.next_id();

    assert_eq!(right.next_id(), 1);
    assert_eq!(left.next_id(), 3);
}

#[test]
fn test_invalid_geometry_does_not_consume_an_id() {
    let ids = IdAllocator::new();

    assert!(Rectangle::new(0, 1, 0, 0, None, &ids).is_err());
    assert!(Square::new(2, -1, 0, None, &ids).is_err());
    assert_eq!(ids.allocated(), 0);
}
