//! Catalog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `books` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `add_book` forces `status = Available` regardless of caller intent.
//! - `list_books` is a full-collection read; no filtering is pushed down
//!   to SQL (catalog filtering happens in memory, per the source design).

use crate::model::book::{validate_rating, Book, BookDraft, BookId, BookStatus};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const BOOK_SELECT_SQL: &str = "SELECT id, title, author, category, status, rating FROM books";

/// Repository interface for catalog operations.
pub trait BookRepository {
    fn add_book(&self, draft: &BookDraft) -> RepoResult<BookId>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    fn delete_book(&self, id: BookId) -> RepoResult<()>;
    fn set_rating(&self, id: BookId, rating: u8) -> RepoResult<()>;
}

/// SQLite-backed catalog repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn add_book(&self, draft: &BookDraft) -> RepoResult<BookId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO books (title, author, category, status) VALUES (?1, ?2, ?3, 'Available');",
            params![
                draft.title.as_str(),
                draft.author.as_str(),
                draft.category.as_str()
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn delete_book(&self, id: BookId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM books WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::BookNotFound(id));
        }
        Ok(())
    }

    fn set_rating(&self, id: BookId, rating: u8) -> RepoResult<()> {
        validate_rating(rating)?;

        let changed = self.conn.execute(
            "UPDATE books SET rating = ?1 WHERE id = ?2;",
            params![rating, id],
        )?;
        if changed == 0 {
            return Err(RepoError::BookNotFound(id));
        }
        Ok(())
    }
}

pub(crate) fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let status_text: String = row.get("status")?;
    let status = parse_book_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in books.status"))
    })?;

    let rating = match row.get::<_, Option<i64>>("rating")? {
        None => None,
        Some(value) => {
            let parsed = u8::try_from(value).ok().filter(|v| (1..=5).contains(v));
            Some(parsed.ok_or_else(|| {
                RepoError::InvalidData(format!("invalid rating `{value}` in books.rating"))
            })?)
        }
    };

    Ok(Book {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        category: row.get("category")?,
        status,
        rating,
    })
}

pub(crate) fn book_status_to_db(status: BookStatus) -> &'static str {
    match status {
        BookStatus::Available => "Available",
        BookStatus::Borrowed => "Borrowed",
    }
}

pub(crate) fn parse_book_status(value: &str) -> Option<BookStatus> {
    match value {
        "Available" => Some(BookStatus::Available),
        "Borrowed" => Some(BookStatus::Borrowed),
        _ => None,
    }
}
