//! Canvas holding the editable rectangles and their selection.

mod operations;
mod types;

pub use types::{Gesture, GestureKind, ShapeProps};

use crate::selection_manager::{Selection, SelectionManager};
use crate::shape_store::ShapeStore;
use layoutkit_core::{Rectangular, ShapeId};

/// Default drawing surface size.
pub const DEFAULT_WIDTH: f64 = 1200.0;
pub const DEFAULT_HEIGHT: f64 = 800.0;

/// Canvas state: ordered shapes, selection and any gesture in flight.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Read access and per-shape queries. Wholesale changes must go through
    /// [`Canvas::replace_all`] or [`Canvas::clear`], which also reset the
    /// selection and any running gesture.
    pub shape_store: ShapeStore,
    pub selection_manager: SelectionManager,
    gesture: Option<Gesture>,
    width: f64,
    height: f64,
}

impl Canvas {
    /// Creates an empty canvas with the default surface size.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(),
            gesture: None,
            width,
            height,
        }
    }

    /// Surface size as `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    /// Shapes in draw order, as committed.
    pub fn shapes(&self) -> impl Iterator<Item = &Rectangular> {
        self.shape_store.iter()
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&Rectangular> {
        self.shape_store.get(id)
    }

    /// Deep copy of the committed shapes, suitable for saving.
    pub fn snapshot(&self) -> Vec<Rectangular> {
        self.shape_store.to_vec()
    }

    /// Shapes in draw order with selection flags, substituting the preview
    /// of a running gesture for the shape it acts on.
    pub fn shape_props(&self) -> Vec<ShapeProps<'_>> {
        let selected = self.selected_id();
        self.shape_store
            .iter()
            .enumerate()
            .map(|(index, shape)| {
                let shape = match &self.gesture {
                    Some(gesture) if gesture.shape_id == shape.id => &gesture.preview,
                    _ => shape,
                };
                ShapeProps {
                    index,
                    shape,
                    is_selected: selected == Some(shape.id),
                }
            })
            .collect()
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selection_manager.selected_id(&self.shape_store)
    }

    pub fn selection(&self) -> Selection {
        self.selection_manager.selection(&self.shape_store)
    }

    pub fn selected_shape(&self) -> Option<&Rectangular> {
        self.selected_id().and_then(|id| self.shape_store.get(id))
    }

    /// The gesture in flight, if any.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Selects `id` (a press on that shape). Unknown ids are ignored.
    pub fn on_select(&mut self, id: ShapeId) -> bool {
        self.selection_manager.select(&self.shape_store, id)
    }

    /// Selects the shape at draw-order `index`.
    pub fn select_index(&mut self, index: usize) -> Option<ShapeId> {
        self.selection_manager
            .select_index(&self.shape_store, index)
    }

    /// A click at `(x, y)`: selects the topmost shape there, or deselects on
    /// empty space.
    pub fn click_at(&mut self, x: f64, y: f64) -> Option<ShapeId> {
        self.selection_manager.select_at(&self.shape_store, x, y)
    }

    /// A press on empty canvas.
    pub fn on_deselect(&mut self) {
        self.selection_manager.deselect();
    }

    /// Appends `shape` on top of the others. Returns its id, or `None` if a
    /// shape with that id is already on the canvas.
    pub fn add_shape(&mut self, shape: Rectangular) -> Option<ShapeId> {
        let id = shape.id;
        self.shape_store.append(shape).then_some(id)
    }

    /// Deletes the selected shape. Idle selection is a no-op.
    pub fn remove_selected(&mut self) -> Option<ShapeId> {
        let id = self.selected_id()?;
        self.abort_gesture_on(id);
        let removed = self
            .selection_manager
            .remove_selected(&mut self.shape_store);
        if let Some(id) = removed {
            tracing::debug!("Removed selected shape {}", id);
        }
        removed
    }

    /// Deletes a specific shape, deselecting it if it was selected.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Rectangular> {
        self.abort_gesture_on(id);
        let removed = self.shape_store.remove(id);
        self.selection_manager.prune(&self.shape_store);
        removed
    }

    /// Replaces every shape and resets the selection.
    pub fn replace_all(&mut self, shapes: Vec<Rectangular>) {
        self.gesture = None;
        self.shape_store.replace_all(shapes);
        self.selection_manager.deselect();
    }

    /// Removes every shape and resets the selection.
    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    fn abort_gesture_on(&mut self, id: ShapeId) {
        if self.gesture.as_ref().is_some_and(|g| g.shape_id == id) {
            tracing::debug!("Aborting gesture on removed shape {}", id);
            self.gesture = None;
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
