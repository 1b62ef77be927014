//! # LayoutKit Designer
//!
//! The editable canvas: an ordered set of rectangles, a single selection,
//! drag/resize gestures and the session that ties them to a signed-in user
//! and their saved layouts.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (Session)
//!   ├── Canvas
//!   │     ├── ShapeStore (Draw order + id index)
//!   │     ├── SelectionManager (Selected shape id)
//!   │     └── Gesture (Uncommitted drag/resize preview)
//!   ├── ShapeGenerator (Random seed shapes)
//!   └── KeyValueStore (Users, active user, layouts)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use layoutkit_designer::{DesignerState, ShapeGenerator};
//! use layoutkit_settings::{Config, MemoryStore};
//!
//! let generator = ShapeGenerator::with_seed(1200.0, 800.0, 1);
//! let mut state =
//!     DesignerState::open_with_generator(MemoryStore::new(), Config::default(), generator)?;
//! assert_eq!(state.canvas.shape_count(), 10);
//!
//! state.sign_in("Ada")?;
//! state.canvas.select_index(3);
//! state.save_layout("Desk")?;
//! # Ok::<(), layoutkit_core::Error>(())
//! ```

pub mod canvas;
pub mod designer_state;
pub mod generator;
pub mod selection_manager;
pub mod shape_store;

pub use canvas::{Canvas, Gesture, GestureKind, ShapeProps};
pub use designer_state::DesignerState;
pub use generator::{HuePalette, ShapeGenerator, SEED_SHAPE_COUNT};
pub use selection_manager::{Selection, SelectionManager};
pub use shape_store::ShapeStore;
