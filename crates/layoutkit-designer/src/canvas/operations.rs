//! Shape manipulation operations for Canvas.

use super::types::{Gesture, GestureKind};
use super::Canvas;
use layoutkit_core::{Color, Rectangular, Result, ShapeId};

impl Canvas {
    /// Starts dragging `id`. The shape becomes selected.
    ///
    /// Any gesture already running is abandoned.
    pub fn begin_drag(&mut self, id: ShapeId) -> bool {
        self.begin_gesture(GestureKind::Drag, id)
    }

    /// Starts resizing `id` through its transform handles.
    pub fn begin_resize(&mut self, id: ShapeId) -> bool {
        self.begin_gesture(GestureKind::Resize, id)
    }

    fn begin_gesture(&mut self, kind: GestureKind, id: ShapeId) -> bool {
        let Some(shape) = self.shape_store.get(id) else {
            return false;
        };
        self.gesture = Some(Gesture::new(kind, shape));
        self.selection_manager.select(&self.shape_store, id);
        true
    }

    /// Moves the drag preview so its top-left corner sits at `(x, y)`.
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        match &mut self.gesture {
            Some(gesture) if gesture.kind == GestureKind::Drag => {
                gesture.preview = gesture.origin.moved_to(x, y);
                true
            }
            _ => false,
        }
    }

    /// Sets the resize preview geometry. Handles on the top or left edge move
    /// the origin as well as the size, hence the full rectangle.
    pub fn resize_to(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        match &mut self.gesture {
            Some(gesture) if gesture.kind == GestureKind::Resize => {
                gesture.preview = gesture.origin.moved_to(x, y).resized(width, height);
                true
            }
            _ => false,
        }
    }

    /// Commits the running gesture's preview as a single update.
    ///
    /// Only the geometry the gesture owns is written: position for a drag,
    /// position and size for a resize. Other edits made to the shape while
    /// the gesture ran are kept.
    pub fn finish_gesture(&mut self) -> Option<ShapeId> {
        let gesture = self.gesture.take()?;
        let Some(current) = self.shape_store.get(gesture.shape_id) else {
            tracing::debug!("Gesture target {} vanished before commit", gesture.shape_id);
            return None;
        };
        let preview = &gesture.preview;
        let committed = match gesture.kind {
            GestureKind::Drag => current.moved_to(preview.x, preview.y),
            GestureKind::Resize => current
                .moved_to(preview.x, preview.y)
                .resized(preview.width, preview.height),
        };
        self.shape_store.update(gesture.shape_id, committed);
        Some(gesture.shape_id)
    }

    /// Drops the running gesture; the store is left as it was.
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    /// Commits `shape` as the new state of the stored shape with the same id.
    pub fn on_change(&mut self, shape: Rectangular) -> bool {
        let id = shape.id;
        if self.gesture.as_ref().is_some_and(|g| g.shape_id == id) {
            self.gesture = None;
        }
        self.shape_store.update(id, shape)
    }

    /// Applies a color to the selected shape.
    ///
    /// Returns `Ok(false)` when nothing is selected. Unparseable colors are a
    /// validation error and leave the shape untouched.
    pub fn on_color_change(&mut self, value: &str) -> Result<bool> {
        let Some(id) = self.selected_id() else {
            return Ok(false);
        };
        let color = Color::parse(value)?;
        Ok(self.recolor(id, color))
    }

    /// Recolors `id`, including the preview of a gesture running on it.
    pub fn recolor(&mut self, id: ShapeId, color: Color) -> bool {
        let Some(updated) = self.shape_store.get(id).map(|shape| shape.recolored(color)) else {
            return false;
        };
        if let Some(gesture) = self.gesture.as_mut().filter(|g| g.shape_id == id) {
            gesture.origin.color = color;
            gesture.preview.color = color;
        }
        self.shape_store.update(id, updated)
    }

    /// Moves the selected shape so its top-left corner is at `(x, y)`.
    pub fn move_selected_to(&mut self, x: f64, y: f64) -> bool {
        self.update_selected(|shape| shape.moved_to(x, y))
    }

    /// Resizes the selected shape. The caller is responsible for clamping.
    pub fn resize_selected(&mut self, width: f64, height: f64) -> bool {
        self.update_selected(|shape| shape.resized(width, height))
    }

    fn update_selected(&mut self, f: impl FnOnce(&Rectangular) -> Rectangular) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        match self.shape_store.get(id).map(f) {
            Some(updated) => self.on_change(updated),
            None => false,
        }
    }
}
