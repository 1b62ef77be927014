//! Shape operations (add, delete, clear, reseed) for designer state.

use super::DesignerState;
use layoutkit_core::ShapeId;
use layoutkit_settings::KeyValueStore;

impl<S: KeyValueStore> DesignerState<S> {
    /// Adds one random shape on top of the others.
    pub fn add_shape(&mut self) -> ShapeId {
        let shape = self.generator.generate();
        let id = shape.id;
        self.canvas.add_shape(shape);
        tracing::debug!(
            "Added shape {} ({} on canvas)",
            id,
            self.canvas.shape_count()
        );
        id
    }

    /// Deletes the selected shape, if any.
    pub fn remove_selected(&mut self) -> Option<ShapeId> {
        self.canvas.remove_selected()
    }

    /// Removes every shape and clears the selection.
    pub fn clear(&mut self) {
        self.canvas.clear();
        tracing::debug!("Canvas cleared");
    }

    /// Replaces the canvas with a fresh random set of shapes.
    pub fn reseed(&mut self) {
        let shapes = self.generator.generate_many(self.config.canvas.seed_count);
        self.canvas.replace_all(shapes);
    }
}
