//! Layout operations (save, list, load, delete) for designer state.
//!
//! All of these act on behalf of the active user and fail with
//! [`Error::NotSignedIn`](layoutkit_core::Error::NotSignedIn) otherwise.

use super::DesignerState;
use layoutkit_core::{Layout, LayoutId, Result};
use layoutkit_settings::{KeyValueStore, LayoutLibrary};

impl<S: KeyValueStore> DesignerState<S> {
    /// Saves a snapshot of the canvas under `name`.
    pub fn save_layout(&mut self, name: &str) -> Result<Layout> {
        let user = self.require_user()?.clone();
        let rects = self.canvas.snapshot();
        LayoutLibrary::new(&mut self.store).save(&user, name, &rects)
    }

    /// The active user's layouts in save order.
    pub fn layouts(&mut self) -> Result<Vec<Layout>> {
        let user = self.require_user()?.clone();
        LayoutLibrary::new(&mut self.store).list_for(&user)
    }

    /// Replaces the canvas with the shapes of layout `id` and clears the
    /// selection. Returns `false` for ids the active user cannot see.
    pub fn load_layout(&mut self, id: LayoutId) -> Result<bool> {
        let user = self.require_user()?.clone();
        let layout = LayoutLibrary::new(&mut self.store)
            .get(id)?
            .filter(|layout| layout.is_owned_by(&user));

        match layout {
            Some(layout) => {
                tracing::info!(
                    "Loaded layout '{}' ({} shapes)",
                    layout.name,
                    layout.rects.len()
                );
                self.canvas.replace_all(layout.rects);
                Ok(true)
            }
            None => {
                tracing::debug!("No visible layout {}", id);
                Ok(false)
            }
        }
    }

    /// Deletes layout `id` if the active user owns it.
    pub fn delete_layout(&mut self, id: LayoutId) -> Result<bool> {
        let user = self.require_user()?.clone();
        LayoutLibrary::new(&mut self.store).delete_for(&user, id)
    }
}
