//! Saved layouts
//!
//! Every user's layouts share one storage key. Ownership is applied when
//! reading: a user only ever sees layouts whose `user_id` matches theirs.

use crate::persistence::{read_json, write_json, KeyValueStore, LAYOUTS_KEY};
use layoutkit_core::{Layout, LayoutId, Rectangular, Result, User, ValidationError};

/// Create/list/load/delete access to the layouts held in a [`KeyValueStore`].
pub struct LayoutLibrary<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> LayoutLibrary<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    fn all(&self) -> Result<Vec<Layout>> {
        Ok(read_json(&*self.store, LAYOUTS_KEY)?.unwrap_or_default())
    }

    fn write_all(&mut self, layouts: &[Layout]) -> Result<()> {
        write_json(&mut *self.store, LAYOUTS_KEY, layouts)?;
        Ok(())
    }

    /// Snapshot `rects` as a new layout named `name` owned by `user`.
    ///
    /// A name that is empty after trimming is rejected and nothing is stored.
    pub fn save(&mut self, user: &User, name: &str, rects: &[Rectangular]) -> Result<Layout> {
        if name.trim().is_empty() {
            tracing::warn!("Rejected layout save with empty name");
            return Err(ValidationError::EmptyName {
                field: "layout name",
            }
            .into());
        }

        let layout = Layout::new(user, name, rects);
        let mut layouts = self.all()?;
        layouts.push(layout.clone());
        self.write_all(&layouts)?;

        tracing::info!(
            "Saved layout '{}' ({} shapes) for user {}",
            layout.name,
            layout.rects.len(),
            user.id
        );
        Ok(layout)
    }

    /// Layouts owned by `user`, in the order they were saved.
    pub fn list_for(&self, user: &User) -> Result<Vec<Layout>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|layout| layout.is_owned_by(user))
            .collect())
    }

    /// Look up a layout by id regardless of owner.
    pub fn get(&self, id: LayoutId) -> Result<Option<Layout>> {
        Ok(self.all()?.into_iter().find(|layout| layout.id == id))
    }

    /// Shapes of the layout `id`, or `None` if there is no such layout.
    pub fn load(&self, id: LayoutId) -> Result<Option<Vec<Rectangular>>> {
        Ok(self.get(id)?.map(|layout| layout.rects))
    }

    /// Remove the layout `id`. Returns `false` (and stores nothing) when absent.
    pub fn delete(&mut self, id: LayoutId) -> Result<bool> {
        self.delete_where(|layout| layout.id == id)
    }

    /// Like [`delete`](Self::delete) but only matches layouts owned by `user`.
    pub fn delete_for(&mut self, user: &User, id: LayoutId) -> Result<bool> {
        self.delete_where(|layout| layout.id == id && layout.is_owned_by(user))
    }

    fn delete_where(&mut self, matches: impl Fn(&Layout) -> bool) -> Result<bool> {
        let mut layouts = self.all()?;
        let before = layouts.len();
        layouts.retain(|layout| !matches(layout));

        if layouts.len() == before {
            tracing::debug!("Layout delete matched nothing");
            return Ok(false);
        }

        self.write_all(&layouts)?;
        tracing::info!("Deleted layout ({} remaining)", layouts.len());
        Ok(true)
    }
}
