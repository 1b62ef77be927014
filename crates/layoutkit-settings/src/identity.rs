//! Local identity provider
//!
//! Keeps the registry of known users and the active user in durable storage.

use crate::persistence::{read_json, write_json, KeyValueStore, CURRENT_USER_KEY, USERS_KEY};
use layoutkit_core::{Result, User, UserId, ValidationError};

/// User registry and active-user slot backed by a [`KeyValueStore`].
pub struct UserRegistry<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> UserRegistry<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// The active user, if any.
    pub fn current_user(&self) -> Result<Option<User>> {
        // A stored `null` means "signed out", same as a missing key
        let user: Option<Option<User>> = read_json(&*self.store, CURRENT_USER_KEY)?;
        Ok(user.flatten())
    }

    /// Replace the active user; `None` signs out.
    pub fn set_current_user(&mut self, user: Option<&User>) -> Result<()> {
        match user {
            Some(user) => {
                write_json(&mut *self.store, CURRENT_USER_KEY, user)?;
                tracing::info!("Active user is now {} ({})", user.name, user.id);
            }
            None => {
                self.store.remove(CURRENT_USER_KEY)?;
                tracing::info!("Active user cleared");
            }
        }
        Ok(())
    }

    /// Every registered user in creation order.
    pub fn list_users(&self) -> Result<Vec<User>> {
        Ok(read_json(&*self.store, USERS_KEY)?.unwrap_or_default())
    }

    /// Look up a registered user.
    pub fn find(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.list_users()?.into_iter().find(|user| user.id == id))
    }

    /// Register a new user. Names that are blank after trimming are rejected.
    pub fn create_user(&mut self, name: &str) -> Result<User> {
        if name.trim().is_empty() {
            tracing::warn!("Rejected user creation with empty name");
            return Err(ValidationError::EmptyName { field: "user name" }.into());
        }

        let user = User::new(name);
        let mut users = self.list_users()?;
        users.push(user.clone());
        write_json(&mut *self.store, USERS_KEY, &users)?;

        tracing::info!("Registered user {} ({})", user.name, user.id);
        Ok(user)
    }
}
