//! Core domain logic for the liblend library-lending system.
//! This crate is the single source of truth for lending invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookDraft, BookId, BookStatus};
pub use model::loan::{
    elapsed_days, fine_for_days, format_timestamp, parse_timestamp, LoanId, LoanRecord,
    LoanStatus, FINE_PER_DAY, LOAN_PERIOD_DAYS, OPEN_LOAN_SENTINEL,
};
pub use model::user::{Role, User, UserDraft, UserId};
pub use model::ValidationError;
pub use repo::book_repo::{BookRepository, SqliteBookRepository};
pub use repo::lending_store::{LendingStore, SqliteLendingStore};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::catalog::{filter_books, CatalogFilter, CatalogService};
pub use service::lending::{LendingService, LoanHistoryEntry, OverdueEntry, ReturnReceipt};
pub use service::roster::RosterService;
pub use service::Snapshot;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
