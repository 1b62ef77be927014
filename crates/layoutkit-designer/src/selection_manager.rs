use crate::shape_store::ShapeStore;
use layoutkit_core::ShapeId;

/// What the canvas currently considers selected, expressed in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    /// Position of the selected shape in the store.
    Selected(usize),
}

/// Tracks the single selected shape.
///
/// The selection is held as a [`ShapeId`] and only turned into a position
/// when asked, against the store passed in. A shape that has since been
/// removed therefore reads as [`Selection::Idle`] instead of silently
/// pointing at whatever now occupies its old slot.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<ShapeId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use layoutkit_designer::selection_manager::SelectionManager;
    /// use layoutkit_designer::shape_store::ShapeStore;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(&ShapeStore::new()), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// The selected shape, provided it still exists in `store`.
    pub fn selected_id(&self, store: &ShapeStore) -> Option<ShapeId> {
        self.selected_id.filter(|id| store.contains(*id))
    }

    /// The selection as a draw-order position.
    pub fn selection(&self, store: &ShapeStore) -> Selection {
        self.selected_id
            .and_then(|id| store.position(id))
            .map_or(Selection::Idle, Selection::Selected)
    }

    pub fn is_selected(&self, store: &ShapeStore, id: ShapeId) -> bool {
        self.selected_id(store) == Some(id)
    }

    /// Selects `id`. Ids not present in `store` leave the selection unchanged.
    pub fn select(&mut self, store: &ShapeStore, id: ShapeId) -> bool {
        if !store.contains(id) {
            tracing::debug!("Ignoring selection of unknown shape {}", id);
            return false;
        }
        self.selected_id = Some(id);
        true
    }

    /// Selects the shape at draw-order `index`.
    pub fn select_index(&mut self, store: &ShapeStore, index: usize) -> Option<ShapeId> {
        let id = store.get_at(index)?.id;
        self.selected_id = Some(id);
        Some(id)
    }

    /// Click handling: selects the topmost shape under the point, or clears
    /// the selection when the click lands on empty space.
    pub fn select_at(&mut self, store: &ShapeStore, x: f64, y: f64) -> Option<ShapeId> {
        self.selected_id = store.hit_test(x, y);
        self.selected_id
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        self.selected_id = None;
    }

    /// Removes the selected shape from `store` and clears the selection.
    pub fn remove_selected(&mut self, store: &mut ShapeStore) -> Option<ShapeId> {
        let id = self.selected_id.take()?;
        store.remove(id).map(|shape| shape.id)
    }

    /// Drops a selection that no longer refers to a stored shape.
    pub fn prune(&mut self, store: &ShapeStore) {
        if self.selected_id.is_some_and(|id| !store.contains(id)) {
            self.selected_id = None;
        }
    }
}
