use layoutkit_core::{Rectangular, ShapeId};
use std::collections::HashMap;

/// Ordered storage for the shapes on the canvas.
///
/// `ShapeStore` keeps the shapes in draw order (later entries are drawn on
/// top) together with an index from [`ShapeId`] to position, so shapes can
/// be addressed either by id or by position without the two drifting apart.
///
/// # Invariants
///
/// - Every id appears at most once.
/// - `positions[shape.id] == i` for the shape at position `i`.
/// - `revision` changes on every successful mutation.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Rectangular>,
    positions: HashMap<ShapeId, usize>,
    revision: u64,
}

impl ShapeStore {
    /// Creates an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// use layoutkit_designer::shape_store::ShapeStore;
    ///
    /// let store = ShapeStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `shapes` (see [`replace_all`](Self::replace_all)).
    pub fn from_shapes(shapes: Vec<Rectangular>) -> Self {
        let mut store = Self::new();
        store.replace_all(shapes);
        store
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if there are no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Counter bumped by every mutation; a renderer can compare it to decide
    /// whether to redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a shape on top of all others.
    ///
    /// Returns `false` and leaves the store untouched if a shape with the
    /// same id is already present.
    pub fn append(&mut self, shape: Rectangular) -> bool {
        if self.positions.contains_key(&shape.id) {
            tracing::warn!("Ignoring append of duplicate shape {}", shape.id);
            return false;
        }
        self.positions.insert(shape.id, self.shapes.len());
        self.shapes.push(shape);
        self.revision += 1;
        true
    }

    /// Removes the shape at `index`. Out-of-range indices are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<Rectangular> {
        if index >= self.shapes.len() {
            return None;
        }
        let removed = self.shapes.remove(index);
        self.positions.remove(&removed.id);
        self.reindex_from(index);
        self.revision += 1;
        Some(removed)
    }

    /// Removes the shape with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ShapeId) -> Option<Rectangular> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Replaces every shape. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, shapes: Vec<Rectangular>) {
        self.shapes.clear();
        self.positions.clear();
        for shape in shapes {
            if self.positions.contains_key(&shape.id) {
                tracing::warn!("Dropping duplicate shape {} during replace", shape.id);
                continue;
            }
            self.positions.insert(shape.id, self.shapes.len());
            self.shapes.push(shape);
        }
        self.revision += 1;
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    /// Replaces the shape at `index`, keeping that slot's id.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn update_at(&mut self, index: usize, mut shape: Rectangular) -> bool {
        let Some(slot) = self.shapes.get_mut(index) else {
            return false;
        };
        if shape.id != slot.id {
            tracing::debug!(
                "update_at({}) keeps id {} instead of {}",
                index,
                slot.id,
                shape.id
            );
            shape.id = slot.id;
        }
        *slot = shape;
        self.revision += 1;
        true
    }

    /// Replaces the shape with `id`. Returns `false` if there is none.
    pub fn update(&mut self, id: ShapeId, shape: Rectangular) -> bool {
        match self.position(id) {
            Some(index) => self.update_at(index, shape),
            None => false,
        }
    }

    /// Position of `id` in draw order.
    pub fn position(&self, id: ShapeId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Returns true if a shape with `id` exists.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Rectangular> {
        self.position(id).and_then(|index| self.shapes.get(index))
    }

    pub fn get_at(&self, index: usize) -> Option<&Rectangular> {
        self.shapes.get(index)
    }

    /// Iterates shapes bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Rectangular> {
        self.shapes.iter()
    }

    /// Deep copy of the shapes in draw order.
    pub fn to_vec(&self) -> Vec<Rectangular> {
        self.shapes.clone()
    }

    /// Topmost shape containing `(x, y)`.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.contains_point(x, y))
            .map(|shape| shape.id)
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, shape) in self.shapes.iter().enumerate().skip(start) {
            self.positions.insert(shape.id, index);
        }
    }
}
