//! Designer state: one editing session.
//!
//! Ties the canvas to durable storage and the active user. Split into:
//! - `identity`: sign in, switch user, sign out
//! - `shapes`: adding, removing and clearing shapes
//! - `layouts`: saving, listing, loading and deleting layouts

mod identity;
mod layouts;
mod shapes;

use crate::generator::ShapeGenerator;
use crate::Canvas;
use layoutkit_core::{Error, Result, User};
use layoutkit_settings::{Config, KeyValueStore, UserRegistry};

/// Session state owned by the application shell.
pub struct DesignerState<S: KeyValueStore> {
    pub canvas: Canvas,
    generator: ShapeGenerator,
    config: Config,
    store: S,
    user: Option<User>,
}

impl<S: KeyValueStore> DesignerState<S> {
    /// Opens a session on `store` with a randomly seeded generator.
    pub fn open(store: S, config: Config) -> Result<Self> {
        let generator = ShapeGenerator::new(config.canvas.width, config.canvas.height);
        Self::open_with_generator(store, config, generator)
    }

    /// Opens a session, restoring the previously active user and seeding
    /// the canvas from `generator`.
    pub fn open_with_generator(
        mut store: S,
        config: Config,
        mut generator: ShapeGenerator,
    ) -> Result<Self> {
        let user = UserRegistry::new(&mut store).current_user()?;
        if let Some(user) = &user {
            tracing::info!("Restored session for {} ({})", user.name, user.id);
        }

        generator.set_surface_size(config.canvas.width, config.canvas.height);
        let mut canvas = Canvas::with_size(config.canvas.width, config.canvas.height);
        canvas.replace_all(generator.generate_many(config.canvas.seed_count));

        Ok(Self {
            canvas,
            generator,
            config,
            store,
            user,
        })
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(Error::NotSignedIn)
    }
}
