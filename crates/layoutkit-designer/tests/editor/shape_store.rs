use layoutkit_core::{Color, Rectangular, ShapeId};
use layoutkit_designer::ShapeStore;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangular {
    Rectangular::new(x, y, w, h, Color::rgb(10, 20, 30))
}

#[test]
fn test_append_and_lookup() {
    let mut store = ShapeStore::new();
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);
    let (a_id, b_id) = (a.id, b.id);

    assert!(store.append(a));
    assert!(store.append(b));
    assert_eq!(store.len(), 2);
    assert_eq!(store.position(a_id), Some(0));
    assert_eq!(store.position(b_id), Some(1));
    assert_eq!(store.get(b_id).map(|s| s.x), Some(5.0));
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut store = ShapeStore::new();
    let a = rect(0.0, 0.0, 10.0, 10.0);
    assert!(store.append(a.clone()));
    assert!(!store.append(a));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_out_of_range_operations_are_noops() {
    let mut store = ShapeStore::from_shapes(vec![rect(0.0, 0.0, 1.0, 1.0)]);
    let before = store.to_vec();

    assert!(store.remove_at(5).is_none());
    assert!(!store.update_at(5, rect(9.0, 9.0, 9.0, 9.0)));
    assert!(store.remove(ShapeId::new()).is_none());
    assert!(!store.update(ShapeId::new(), rect(9.0, 9.0, 9.0, 9.0)));
    assert_eq!(store.to_vec(), before);
}

#[test]
fn test_update_keeps_slot_id() {
    let original = rect(0.0, 0.0, 10.0, 10.0);
    let id = original.id;
    let mut store = ShapeStore::from_shapes(vec![original]);

    // A replacement carrying a foreign id still lands in the same slot
    assert!(store.update_at(0, rect(50.0, 60.0, 10.0, 10.0)));
    let shape = store.get_at(0).unwrap();
    assert_eq!(shape.id, id);
    assert_eq!((shape.x, shape.y), (50.0, 60.0));
}

#[test]
fn test_hit_test_prefers_topmost() {
    let bottom = rect(0.0, 0.0, 100.0, 100.0);
    let top = rect(50.0, 50.0, 100.0, 100.0);
    let (bottom_id, top_id) = (bottom.id, top.id);
    let store = ShapeStore::from_shapes(vec![bottom, top]);

    assert_eq!(store.hit_test(75.0, 75.0), Some(top_id));
    assert_eq!(store.hit_test(10.0, 10.0), Some(bottom_id));
    // Edges count as inside
    assert_eq!(store.hit_test(150.0, 150.0), Some(top_id));
    assert_eq!(store.hit_test(151.0, 10.0), None);
}

#[test]
fn test_replace_all_drops_later_duplicates() {
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let mut dup = a.clone();
    dup.x = 99.0;
    let store = ShapeStore::from_shapes(vec![a.clone(), dup]);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(a.id).unwrap().x, 0.0);
}
