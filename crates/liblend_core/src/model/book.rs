//! Catalog book model.
//!
//! # Responsibility
//! - Define the book record and its availability lifecycle.
//! - Validate drafts before they reach persistence.
//!
//! # Invariants
//! - `id` is store-assigned and never reused for another book.
//! - `status` is `Borrowed` iff exactly one open loan record carries this
//!   book's title; the flag itself is the only enforced side of that pair.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// Stable store-assigned identifier for a catalog book.
pub type BookId = i64;

/// Availability lifecycle of a catalog book.
///
/// A book cycles `Available -> Borrowed -> Available`; the loan record
/// created per cycle carries the terminal `Returned` state instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

/// Canonical catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub status: BookStatus,
    /// Optional 1..=5 star rating.
    pub rating: Option<u8>,
}

/// Input shape for creating a book; status is always forced to
/// `Available` by the repository regardless of caller intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub category: String,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    /// Rejects blank required fields before any write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::MissingAuthor);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Ok(())
    }
}

/// Validates an optional star rating against the 1..=5 range.
pub fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}
