//! Canvas type definitions: GestureKind, Gesture, ShapeProps.

use layoutkit_core::{Rectangular, ShapeId};

/// Kind of pointer gesture in progress on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

/// An uncommitted drag or resize.
///
/// `preview` is what the renderer shows while the gesture runs; the store
/// only sees it once the gesture is finished.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    pub shape_id: ShapeId,
    pub(crate) origin: Rectangular,
    pub(crate) preview: Rectangular,
}

impl Gesture {
    pub(crate) fn new(kind: GestureKind, shape: &Rectangular) -> Self {
        Self {
            kind,
            shape_id: shape.id,
            origin: shape.clone(),
            preview: shape.clone(),
        }
    }

    /// Shape as it was when the gesture began.
    pub fn origin(&self) -> &Rectangular {
        &self.origin
    }

    /// Shape as it currently looks under the pointer.
    pub fn preview(&self) -> &Rectangular {
        &self.preview
    }
}

/// Per-shape data handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeProps<'a> {
    pub index: usize,
    pub shape: &'a Rectangular,
    pub is_selected: bool,
}
