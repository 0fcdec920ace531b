//! Catalog use-case service and in-memory filtering.
//!
//! # Responsibility
//! - Provide add/list/delete/rate entry points for the catalog.
//! - Filter a loaded book list in memory (search term, category, status),
//!   the way the source UI filters its loaded snapshot. Filtering is
//!   never pushed down to SQL.

use crate::model::book::{Book, BookDraft, BookId, BookStatus};
use crate::repo::book_repo::BookRepository;
use crate::repo::RepoResult;

/// In-memory catalog filter. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Case-insensitive substring match over title and author.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Availability match.
    pub status: Option<BookStatus>,
}

/// Catalog service facade over a book repository implementation.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a book to the catalog; status is always `Available`.
    pub fn add_book(&self, draft: &BookDraft) -> RepoResult<BookId> {
        self.repo.add_book(draft)
    }

    /// Gets one book by id.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    /// Full-collection read of the catalog in id order.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books()
    }

    /// Hard-deletes a book by id.
    pub fn delete_book(&self, id: BookId) -> RepoResult<()> {
        self.repo.delete_book(id)
    }

    /// Sets a 1..=5 star rating on a book.
    pub fn set_rating(&self, id: BookId, rating: u8) -> RepoResult<()> {
        self.repo.set_rating(id, rating)
    }
}

/// Filters a loaded book list the way the source dashboard does: search
/// term over title/author (case-insensitive substring), exact category,
/// exact status.
pub fn filter_books<'a>(books: &'a [Book], filter: &CatalogFilter) -> Vec<&'a Book> {
    let needle = filter
        .search
        .as_deref()
        .map(|term| term.to_lowercase());

    books
        .iter()
        .filter(|book| {
            if let Some(needle) = &needle {
                let hit = book.title.to_lowercase().contains(needle)
                    || book.author.to_lowercase().contains(needle);
                if !hit {
                    return false;
                }
            }
            if let Some(category) = &filter.category {
                if &book.category != category {
                    return false;
                }
            }
            if let Some(status) = filter.status {
                if book.status != status {
                    return false;
                }
            }
            true
        })
        .collect()
}
