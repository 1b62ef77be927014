//! LayoutKit Settings Crate
//!
//! Handles application configuration and durable storage: the key-value
//! backends, the user registry and the per-user library of saved layouts.

pub mod config;
pub mod error;
pub mod identity;
pub mod layouts;
pub mod persistence;

pub use config::{CanvasSettings, Config, StorageSettings};
pub use error::{ConfigError, ConfigResult, StorageError, StorageResult};
pub use identity::UserRegistry;
pub use layouts::LayoutLibrary;
pub use persistence::{
    read_json, write_json, FileStore, KeyValueStore, MemoryStore, CURRENT_USER_KEY, LAYOUTS_KEY,
    USERS_KEY,
};
