//! Identity operations (sign in, switch, sign out) for designer state.

use super::DesignerState;
use layoutkit_core::{Error, Result, User, UserId};
use layoutkit_settings::{KeyValueStore, UserRegistry};

impl<S: KeyValueStore> DesignerState<S> {
    /// Every registered user.
    pub fn users(&mut self) -> Result<Vec<User>> {
        UserRegistry::new(&mut self.store).list_users()
    }

    /// Registers `name` as a new user and makes them active.
    pub fn sign_in(&mut self, name: &str) -> Result<User> {
        let mut registry = UserRegistry::new(&mut self.store);
        let user = registry.create_user(name)?;
        registry.set_current_user(Some(&user))?;
        self.activate(user.clone());
        Ok(user)
    }

    /// Makes an already registered user active.
    pub fn switch_user(&mut self, id: UserId) -> Result<User> {
        let mut registry = UserRegistry::new(&mut self.store);
        let user = registry.find(id)?.ok_or_else(|| Error::NotFound {
            kind: "user",
            id: id.to_string(),
        })?;
        registry.set_current_user(Some(&user))?;
        self.activate(user.clone());
        Ok(user)
    }

    /// Clears the active user and tears down the canvas.
    pub fn sign_out(&mut self) -> Result<()> {
        UserRegistry::new(&mut self.store).set_current_user(None)?;
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.name);
        }
        self.canvas.clear();
        Ok(())
    }

    fn activate(&mut self, user: User) {
        tracing::info!("Signed in as {} ({})", user.name, user.id);
        self.user = Some(user);
        // A canvas torn down by sign-out starts over with fresh shapes
        if self.canvas.shape_count() == 0 {
            self.reseed();
        }
    }
}
