//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep embedding UI layers decoupled from storage details.
//!
//! # Invariants
//! - Consistency is refresh-everything: mutations return minimal receipts
//!   and callers reload all three collections via [`Snapshot::load`].
//!   Nothing is updated incrementally.

use crate::model::book::Book;
use crate::model::loan::LoanRecord;
use crate::model::user::User;
use crate::repo::book_repo::{BookRepository, SqliteBookRepository};
use crate::repo::lending_store::load_loans;
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use crate::repo::RepoResult;
use rusqlite::Connection;
use serde::Serialize;

pub mod catalog;
pub mod lending;
pub mod roster;

/// Full reload of all three collections, taken after every mutation.
///
/// The source UI redraws from exactly this shape; keeping the reload
/// whole (rather than diffing) is a deliberate simplicity-over-efficiency
/// decision carried over from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub books: Vec<Book>,
    pub users: Vec<User>,
    pub loans: Vec<LoanRecord>,
}

impl Snapshot {
    /// Loads all three collections in id order.
    pub fn load(conn: &Connection) -> RepoResult<Self> {
        Ok(Self {
            books: SqliteBookRepository::new(conn).list_books()?,
            users: SqliteUserRepository::new(conn).list_users()?,
            loans: load_loans(conn)?,
        })
    }
}
