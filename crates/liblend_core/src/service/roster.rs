//! Roster use-case service: accounts, credentials, password changes.
//!
//! # Responsibility
//! - Provide add/list/delete entry points for the user roster.
//! - Check credentials the way the source login does: plain-text
//!   comparison over the loaded roster.
//! - Gate password changes behind the confirmation check before the
//!   unconditional overwrite.

use crate::model::user::{User, UserDraft, UserId};
use crate::model::ValidationError;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;

/// Roster service facade over a user repository implementation.
pub struct RosterService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a user (admins use this to create librarians and students).
    pub fn add_user(&self, draft: &UserDraft) -> RepoResult<UserId> {
        self.repo.add_user(draft)
    }

    /// Gets one user by id.
    pub fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        self.repo.get_user(id)
    }

    /// Full-collection read of the roster in id order.
    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.repo.list_users()
    }

    /// Hard-deletes a user by id. Protecting the seed Admin is an
    /// embedding-UI convention, not enforced here.
    pub fn delete_user(&self, id: UserId) -> RepoResult<()> {
        self.repo.delete_user(id)
    }

    /// Checks credentials by plain-text comparison over the roster.
    /// Returns the matching user, or `None` when nothing matches.
    pub fn authenticate(&self, username: &str, password: &str) -> RepoResult<Option<User>> {
        let user = self
            .repo
            .list_users()?
            .into_iter()
            .find(|user| user.username == username && user.password == password);
        Ok(user)
    }

    /// Changes a password after the confirmation check: both fields must
    /// be non-blank and equal. The write itself is the unconditional
    /// overwrite from the repository, with no old-password check.
    pub fn change_password(
        &self,
        id: UserId,
        new_password: &str,
        confirm_password: &str,
    ) -> RepoResult<()> {
        if new_password.trim().is_empty() || confirm_password.trim().is_empty() {
            return Err(ValidationError::MissingPassword.into());
        }
        if new_password != confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        self.repo.update_password(id, new_password)
    }
}
