//! # LayoutKit
//!
//! A small rectangle layout editor: randomly seeded rectangles that can be
//! selected, dragged, resized, recolored and deleted, with named snapshots
//! saved per user.
//!
//! ## Architecture
//!
//! LayoutKit is organized as a workspace with multiple crates:
//!
//! 1. **layoutkit-core** - Data model (users, rectangles, colors, layouts) and errors
//! 2. **layoutkit-settings** - Configuration, durable key-value storage, users and layouts
//! 3. **layoutkit-designer** - Shape store, selection, gestures and the editing session
//! 4. **layoutkit** - Command-line driver that integrates all crates

pub mod cli;

pub use layoutkit_core::data;
pub use layoutkit_designer as designer;
pub use layoutkit_settings as settings;

pub use layoutkit_core::{
    Color, Error, Layout, LayoutId, Rectangular, Result, ShapeId, User, UserId, ValidationError,
};
pub use layoutkit_designer::{Canvas, DesignerState, Selection, ShapeGenerator};
pub use layoutkit_settings::{Config, FileStore, KeyValueStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so stdout stays free for command output. The level
/// defaults to INFO and can be changed through `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
