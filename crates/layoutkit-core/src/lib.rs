//! # LayoutKit Core
//!
//! Core types and error handling for LayoutKit.
//! Provides the data model shared by the shape editor and the
//! persistence layer: users, rectangles, colors and saved layouts.

pub mod data;
pub mod error;

pub use data::{Color, Layout, LayoutId, Rectangular, ShapeId, User, UserId};
pub use error::{Error, Result, ValidationError};
