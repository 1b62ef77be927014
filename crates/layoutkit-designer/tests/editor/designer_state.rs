use layoutkit_core::{Error, LayoutId, UserId};
use layoutkit_designer::{DesignerState, Selection, ShapeGenerator};
use layoutkit_settings::{Config, FileStore, MemoryStore};

fn open(store: MemoryStore) -> DesignerState<MemoryStore> {
    let generator = ShapeGenerator::with_seed(1200.0, 800.0, 5);
    DesignerState::open_with_generator(store, Config::default(), generator).unwrap()
}

#[test]
fn test_new_session_is_seeded_and_signed_out() {
    let state = open(MemoryStore::new());
    assert_eq!(state.canvas.shape_count(), 10);
    assert_eq!(state.canvas.selection(), Selection::Idle);
    assert!(state.current_user().is_none());
}

#[test]
fn test_seed_count_follows_config() {
    let mut config = Config::default();
    config.canvas.seed_count = 3;
    let generator = ShapeGenerator::with_seed(1.0, 1.0, 5);
    let state = DesignerState::open_with_generator(MemoryStore::new(), config, generator).unwrap();

    assert_eq!(state.canvas.shape_count(), 3);
    // The generator is resized to the configured surface
    for shape in state.canvas.shapes() {
        assert!(shape.x < 600.0 && shape.y < 400.0);
    }
}

#[test]
fn test_layout_operations_require_sign_in() {
    let mut state = open(MemoryStore::new());
    assert!(matches!(state.save_layout("Desk"), Err(Error::NotSignedIn)));
    assert!(matches!(state.layouts(), Err(Error::NotSignedIn)));
    assert!(matches!(
        state.load_layout(LayoutId::new()),
        Err(Error::NotSignedIn)
    ));
    assert!(matches!(
        state.delete_layout(LayoutId::new()),
        Err(Error::NotSignedIn)
    ));
}

#[test]
fn test_save_and_delete_layout() {
    let mut state = open(MemoryStore::new());
    state.sign_in("U1").unwrap();

    let desk = state.save_layout("Desk").unwrap();
    let listed = state.layouts().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Desk");
    assert_eq!(listed[0].rects, state.canvas.snapshot());

    assert!(state.delete_layout(desk.id).unwrap());
    assert!(state.layouts().unwrap().is_empty());
    assert!(!state.delete_layout(desk.id).unwrap());
}

#[test]
fn test_blank_layout_name_is_rejected() {
    let mut state = open(MemoryStore::new());
    state.sign_in("U1").unwrap();
    assert!(state.save_layout("   ").unwrap_err().is_validation());
    assert!(state.layouts().unwrap().is_empty());
}

#[test]
fn test_saved_layout_is_isolated_from_later_edits() {
    let mut state = open(MemoryStore::new());
    state.sign_in("Ada").unwrap();
    let saved = state.save_layout("Before").unwrap();

    state.canvas.select_index(0);
    state.canvas.move_selected_to(999.0, 999.0);
    state.remove_selected();
    state.clear();

    assert_eq!(state.layouts().unwrap()[0].rects, saved.rects);
    assert_eq!(saved.rects.len(), 10);
}

#[test]
fn test_load_layout_restores_shapes_and_clears_selection() {
    let mut state = open(MemoryStore::new());
    state.sign_in("Ada").unwrap();
    let saved = state.save_layout("Start").unwrap();

    state.add_shape();
    state.canvas.select_index(10);
    assert_eq!(state.canvas.selection(), Selection::Selected(10));

    assert!(state.load_layout(saved.id).unwrap());
    assert_eq!(state.canvas.snapshot(), saved.rects);
    assert_eq!(state.canvas.selection(), Selection::Idle);

    // Unknown ids leave the canvas as it is
    assert!(!state.load_layout(LayoutId::new()).unwrap());
    assert_eq!(state.canvas.snapshot(), saved.rects);
}

#[test]
fn test_other_users_layouts_are_invisible() {
    let mut state = open(MemoryStore::new());
    let ada = state.sign_in("Ada").unwrap();
    let adas = state.save_layout("Ada's").unwrap();

    state.sign_in("Bob").unwrap();
    assert!(state.layouts().unwrap().is_empty());
    assert!(!state.load_layout(adas.id).unwrap());
    assert!(!state.delete_layout(adas.id).unwrap());

    state.switch_user(ada.id).unwrap();
    assert_eq!(state.layouts().unwrap().len(), 1);
}

#[test]
fn test_sign_out_tears_down_canvas() {
    let mut state = open(MemoryStore::new());
    state.sign_in("Ada").unwrap();
    state.canvas.select_index(2);

    state.sign_out().unwrap();
    assert!(state.current_user().is_none());
    assert_eq!(state.canvas.shape_count(), 0);
    assert_eq!(state.canvas.selection(), Selection::Idle);

    // Signing back in starts a fresh canvas
    let users = state.users().unwrap();
    state.switch_user(users[0].id).unwrap();
    assert_eq!(state.canvas.shape_count(), 10);
}

#[test]
fn test_sign_in_keeps_existing_canvas() {
    let mut state = open(MemoryStore::new());
    let before = state.canvas.snapshot();
    state.sign_in("Ada").unwrap();
    assert_eq!(state.canvas.snapshot(), before);
}

#[test]
fn test_switch_to_unknown_user_fails() {
    let mut state = open(MemoryStore::new());
    let err = state.switch_user(UserId::new()).unwrap_err();
    assert!(err.is_not_found());
    assert!(state.current_user().is_none());
}

#[test]
fn test_blank_user_name_is_rejected() {
    let mut state = open(MemoryStore::new());
    assert!(state.sign_in("").unwrap_err().is_validation());
    assert!(state.users().unwrap().is_empty());
}

#[test]
fn test_session_restores_user_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let ada;
    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut state = DesignerState::open(store, Config::default()).unwrap();
        ada = state.sign_in("Ada").unwrap();
        state.save_layout("Desk").unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    let mut state = DesignerState::open(store, Config::default()).unwrap();
    assert_eq!(state.current_user(), Some(&ada));
    assert_eq!(state.layouts().unwrap().len(), 1);
}
