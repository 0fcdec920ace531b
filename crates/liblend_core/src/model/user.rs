//! Roster user model.
//!
//! # Responsibility
//! - Define the user record and role taxonomy.
//! - Validate drafts before they reach persistence.
//!
//! # Invariants
//! - `id` is store-assigned and never reused for another user.
//! - Passwords are stored and compared in plain text by design of the
//!   source system; this crate adds no hashing.
//! - Username uniqueness is by convention only, not enforced.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// Stable store-assigned identifier for a roster user.
pub type UserId = i64;

/// Access role for a roster user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Librarian,
    Student,
}

/// Canonical roster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Input shape for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl UserDraft {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// Rejects blank required fields before any write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(())
    }
}
