use layoutkit_core::{Color, Rectangular, ShapeId};
use layoutkit_designer::{Canvas, GestureKind, Selection, ShapeGenerator};

fn seeded_canvas(count: usize) -> (Canvas, Vec<ShapeId>) {
    let mut canvas = Canvas::new();
    let mut generator = ShapeGenerator::with_seed(1200.0, 800.0, 11);
    canvas.replace_all(generator.generate_many(count));
    let ids = canvas.shapes().map(|s| s.id).collect();
    (canvas, ids)
}

#[test]
fn test_select_then_drag_keeps_selection() {
    let (mut canvas, ids) = seeded_canvas(10);

    canvas.select_index(3);
    assert_eq!(canvas.selection(), Selection::Selected(3));
    let before = canvas.get_shape(ids[3]).unwrap().clone();

    assert!(canvas.begin_drag(ids[3]));
    canvas.drag_to(50.0, 60.0);
    canvas.finish_gesture();

    let moved = canvas.get_shape(ids[3]).unwrap();
    assert_eq!((moved.x, moved.y), (50.0, 60.0));
    assert_eq!(moved.id, before.id);
    assert_eq!((moved.width, moved.height), (before.width, before.height));
    assert_eq!(moved.color, before.color);
    assert_eq!(canvas.selection(), Selection::Selected(3));
    assert_eq!(canvas.shape_count(), 10);
}

#[test]
fn test_delete_selected_shape() {
    let (mut canvas, ids) = seeded_canvas(10);
    canvas.select_index(3);

    assert_eq!(canvas.remove_selected(), Some(ids[3]));
    assert_eq!(canvas.shape_count(), 9);
    assert_eq!(canvas.selection(), Selection::Idle);
    assert!(canvas.get_shape(ids[3]).is_none());

    // Remaining shapes keep their relative order
    let remaining: Vec<_> = canvas.shapes().map(|s| s.id).collect();
    let mut expected = ids.clone();
    expected.remove(3);
    assert_eq!(remaining, expected);
}

#[test]
fn test_delete_with_nothing_selected_is_noop() {
    let (mut canvas, _) = seeded_canvas(4);
    let before = canvas.snapshot();
    assert_eq!(canvas.remove_selected(), None);
    assert_eq!(canvas.snapshot(), before);
}

#[test]
fn test_deselect_by_clicking_empty_space() {
    let mut canvas = Canvas::new();
    let id = canvas
        .add_shape(Rectangular::new(0.0, 0.0, 10.0, 10.0, Color::BLACK))
        .unwrap();

    assert_eq!(canvas.click_at(5.0, 5.0), Some(id));
    assert_eq!(canvas.click_at(500.0, 500.0), None);
    assert_eq!(canvas.selection(), Selection::Idle);
}

#[test]
fn test_selecting_another_shape_moves_selection() {
    let (mut canvas, ids) = seeded_canvas(3);
    canvas.on_select(ids[0]);
    canvas.on_select(ids[2]);
    assert_eq!(canvas.selected_id(), Some(ids[2]));

    let flags: Vec<_> = canvas.shape_props().iter().map(|p| p.is_selected).collect();
    assert_eq!(flags, vec![false, false, true]);
}

#[test]
fn test_unknown_id_does_not_change_selection() {
    let (mut canvas, ids) = seeded_canvas(3);
    canvas.on_select(ids[1]);
    assert!(!canvas.on_select(ShapeId::new()));
    assert_eq!(canvas.selected_id(), Some(ids[1]));
}

#[test]
fn test_cancel_gesture_leaves_store_untouched() {
    let (mut canvas, ids) = seeded_canvas(3);
    let before = canvas.snapshot();
    let revision = canvas.shape_store.revision();

    canvas.begin_resize(ids[0]);
    assert_eq!(canvas.gesture().map(|g| g.kind), Some(GestureKind::Resize));
    canvas.resize_to(1.0, 2.0, 300.0, 400.0);
    assert_eq!(canvas.shape_props()[0].shape.width, 300.0);

    canvas.cancel_gesture();
    assert!(canvas.gesture().is_none());
    assert_eq!(canvas.snapshot(), before);
    assert_eq!(canvas.shape_store.revision(), revision);
}

#[test]
fn test_resize_commits_once() {
    let (mut canvas, ids) = seeded_canvas(2);
    let revision = canvas.shape_store.revision();

    canvas.begin_resize(ids[1]);
    for step in 1..=20 {
        canvas.resize_to(0.0, 0.0, 100.0 + step as f64, 100.0 + step as f64);
    }
    assert_eq!(canvas.finish_gesture(), Some(ids[1]));

    assert_eq!(canvas.shape_store.revision(), revision + 1);
    let shape = canvas.get_shape(ids[1]).unwrap();
    assert_eq!((shape.width, shape.height), (120.0, 120.0));
}

#[test]
fn test_removing_gesture_target_aborts_gesture() {
    let (mut canvas, ids) = seeded_canvas(2);
    canvas.begin_drag(ids[0]);
    canvas.drag_to(10.0, 10.0);
    canvas.remove_selected();

    assert!(canvas.gesture().is_none());
    assert_eq!(canvas.finish_gesture(), None);
    assert_eq!(canvas.shape_count(), 1);
}

#[test]
fn test_color_change_applies_to_selected() {
    let (mut canvas, ids) = seeded_canvas(2);
    canvas.on_select(ids[0]);

    assert!(canvas.on_color_change("#FF8800").unwrap());
    assert_eq!(canvas.get_shape(ids[0]).unwrap().color.to_hex(), "#ff8800");

    let before = canvas.snapshot();
    assert!(canvas.on_color_change("orange-ish").is_err());
    assert_eq!(canvas.snapshot(), before);
}

#[test]
fn test_on_change_replaces_shape_by_id() {
    let (mut canvas, ids) = seeded_canvas(2);
    let edited = canvas.get_shape(ids[1]).unwrap().moved_to(7.0, 8.0);

    assert!(canvas.on_change(edited.clone()));
    assert_eq!(canvas.get_shape(ids[1]), Some(&edited));
    let stranger = Rectangular::new(0.0, 0.0, 1.0, 1.0, Color::WHITE);
    assert!(!canvas.on_change(stranger));
}

#[test]
fn test_move_and_resize_selected() {
    let (mut canvas, ids) = seeded_canvas(2);
    assert!(!canvas.move_selected_to(1.0, 1.0));

    canvas.on_select(ids[0]);
    assert!(canvas.move_selected_to(1.0, 2.0));
    assert!(canvas.resize_selected(30.0, 40.0));
    assert_eq!(
        canvas.get_shape(ids[0]).unwrap().bounds(),
        (1.0, 2.0, 31.0, 42.0)
    );
}

#[test]
fn test_recolor_during_resize_is_kept() {
    let (mut canvas, ids) = seeded_canvas(3);
    canvas.begin_resize(ids[1]);
    canvas.resize_to(5.0, 6.0, 150.0, 160.0);
    canvas.on_color_change("#abcdef").unwrap();
    assert_eq!(canvas.finish_gesture(), Some(ids[1]));

    let shape = canvas.get_shape(ids[1]).unwrap();
    assert_eq!(shape.bounds(), (5.0, 6.0, 155.0, 166.0));
    assert_eq!(shape.color.to_hex(), "#abcdef");
}

#[test]
fn test_remove_selected_shape_by_id_deselects() {
    let (mut canvas, ids) = seeded_canvas(4);
    canvas.on_select(ids[2]);

    let removed = canvas.remove_shape(ids[2]).unwrap();
    assert_eq!(removed.id, ids[2]);
    assert_eq!(canvas.shape_count(), 3);
    assert_eq!(canvas.selection(), Selection::Idle);
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_remove_other_shape_keeps_selection() {
    let (mut canvas, ids) = seeded_canvas(4);
    canvas.on_select(ids[3]);

    assert!(canvas.remove_shape(ids[0]).is_some());
    assert!(canvas.remove_shape(ShapeId::new()).is_none());
    // The selected shape moved down one slot
    assert_eq!(canvas.selection(), Selection::Selected(2));
}

#[test]
fn test_canvas_size() {
    assert_eq!(Canvas::new().size(), (1200.0, 800.0));
    assert_eq!(Canvas::with_size(640.0, 480.0).size(), (640.0, 480.0));
}

#[test]
fn test_replace_all_resets_selection() {
    let (mut canvas, _) = seeded_canvas(5);
    canvas.select_index(0);

    let replacement = ShapeGenerator::with_seed(1200.0, 800.0, 3).generate_many(5);
    canvas.replace_all(replacement);
    assert_eq!(canvas.selection(), Selection::Idle);

    canvas.select_index(1);
    canvas.clear();
    assert_eq!(canvas.shape_count(), 0);
    assert_eq!(canvas.selection(), Selection::Idle);
}
