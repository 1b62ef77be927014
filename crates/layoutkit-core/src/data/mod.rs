//! Data models for users, shapes and saved layouts
//!
//! This module provides:
//! - Opaque identifiers (`UserId`, `ShapeId`, `LayoutId`)
//! - Hex colors for shape fills
//! - `Rectangular`, the axis-aligned rectangle placed on the canvas
//! - `User` and `Layout`, the persisted entities

mod color;
mod ids;

pub use color::Color;
pub use ids::{LayoutId, ShapeId, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user known to the identity provider. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Creates a user with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
        }
    }
}

/// An axis-aligned rectangle on the canvas.
///
/// `width` and `height` are expected to be positive but this is not
/// enforced; use [`Rectangular::clamped`] before committing user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangular {
    pub id: ShapeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl Rectangular {
    /// Creates a rectangle with a fresh id.
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self {
            id: ShapeId::new(),
            x,
            y,
            width,
            height,
            color,
        }
    }

    /// Returns true if the point lies inside the rectangle (edges included).
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Copy with the same id moved to `(x, y)`.
    pub fn moved_to(&self, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }

    /// Copy with the same id resized to `width` x `height`.
    pub fn resized(&self, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }

    /// Copy with the same id and a new fill color.
    pub fn recolored(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// Copy whose width and height are at least `min_size`.
    pub fn clamped(&self, min_size: f64) -> Self {
        Self {
            width: self.width.max(min_size),
            height: self.height.max(min_size),
            ..self.clone()
        }
    }
}

/// A named, immutable snapshot of the canvas owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub id: LayoutId,
    pub user_id: UserId,
    pub name: String,
    pub rects: Vec<Rectangular>,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Layout {
    /// Snapshots `rects` into a new layout for `user`.
    pub fn new(user: &User, name: impl Into<String>, rects: &[Rectangular]) -> Self {
        Self {
            id: LayoutId::new(),
            user_id: user.id,
            name: name.into(),
            rects: rects.to_vec(),
            created: Utc::now(),
        }
    }

    /// Returns true if the layout belongs to `user`.
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user_id == user.id
    }
}
