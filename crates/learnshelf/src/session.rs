//! The signed-in user, passed explicitly to everything that needs it.
//!
//! How the identity was obtained (password, OAuth, a config file) is not this
//! crate's business. A [`Session`] only vouches that some caller decided who
//! the current user is; stores use it to scope reads and guard writes.

use crate::error::{Result, ShelfError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into().trim().to_string();
        if user_id.is_empty() {
            return Err(ShelfError::Api("Not authenticated: empty user id".into()));
        }
        Ok(Self { user_id })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
