//! Domain model for the lending core.
//!
//! # Responsibility
//! - Define canonical records for catalog, roster and loan log.
//! - Define write-path validation shared by repositories and services.
//!
//! # Invariants
//! - Every record is identified by a stable store-assigned integer id.
//! - Loan records are append-then-settle: created on borrow, mutated once
//!   on return, never deleted.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod book;
pub mod loan;
pub mod user;

/// Write-path validation failure, rejected before any persistence write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingTitle,
    MissingAuthor,
    MissingCategory,
    MissingUsername,
    MissingPassword,
    /// Password confirmation fields differ.
    PasswordMismatch,
    /// Star rating outside the 1..=5 range.
    RatingOutOfRange(u8),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "book title must not be blank"),
            Self::MissingAuthor => write!(f, "book author must not be blank"),
            Self::MissingCategory => write!(f, "book category must not be blank"),
            Self::MissingUsername => write!(f, "username must not be blank"),
            Self::MissingPassword => write!(f, "password must not be blank"),
            Self::PasswordMismatch => write!(f, "passwords do not match"),
            Self::RatingOutOfRange(value) => {
                write!(f, "rating {value} is outside the allowed 1..=5 range")
            }
        }
    }
}

impl Error for ValidationError {}
