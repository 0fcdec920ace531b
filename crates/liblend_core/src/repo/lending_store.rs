//! Loan log store and the atomic borrow/return writes.
//!
//! # Responsibility
//! - Provide the two multi-table mutations of the lending lifecycle,
//!   each wrapped in a single SQLite transaction.
//! - Provide full-collection reads over the `loans` table.
//!
//! # Invariants
//! - Borrow and return each flip the book status and touch the loan log
//!   inside one transaction: both writes land or both roll back.
//! - Return settles the first open loan matching
//!   `(book_title, username)` in id order. When no record matches, the
//!   book status still flips to Available; that inconsistency is
//!   tolerated deliberately for parity with the source behavior.
//! - Loan records are never deleted.

use crate::model::book::{BookId, BookStatus};
use crate::model::loan::{format_timestamp, LoanId, LoanRecord, LoanStatus, OPEN_LOAN_SENTINEL};
use crate::repo::book_repo::book_status_to_db;
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDateTime;
use log::info;
use rusqlite::{params, Connection, Row};

const LOAN_SELECT_SQL: &str =
    "SELECT id, book_title, username, borrow_date, return_date, status FROM loans";

/// Store interface for the borrow/return lifecycle.
pub trait LendingStore {
    /// Borrows a book: flips its status to `Borrowed` and appends an open
    /// loan record, atomically. Errors with `BookNotFound` when the id
    /// does not resolve.
    ///
    /// No check prevents a borrower from holding a stale open record for
    /// the same title; the single book-status flag is the only enforced
    /// invariant, per the source behavior.
    fn borrow_book(&mut self, book_id: BookId, username: &str, now: NaiveDateTime)
        -> RepoResult<LoanId>;

    /// Returns a book: flips its status to `Available` and settles the
    /// first matching open loan record, atomically. Yields the settled
    /// record, or `None` when no open record matched (the status flip
    /// still happens and commits).
    fn return_book(
        &mut self,
        book_id: BookId,
        username: &str,
        now: NaiveDateTime,
    ) -> RepoResult<Option<LoanRecord>>;

    /// Full-collection read of the loan log in id order.
    fn list_loans(&self) -> RepoResult<Vec<LoanRecord>>;
}

/// SQLite-backed lending store.
///
/// Holds the connection mutably because borrow/return open explicit
/// transactions across `books` and `loans`.
pub struct SqliteLendingStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteLendingStore<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl LendingStore for SqliteLendingStore<'_> {
    fn borrow_book(
        &mut self,
        book_id: BookId,
        username: &str,
        now: NaiveDateTime,
    ) -> RepoResult<LoanId> {
        let tx = self.conn.transaction()?;

        let title = book_title(&tx, book_id)?;
        tx.execute(
            "UPDATE books SET status = ?1 WHERE id = ?2;",
            params![book_status_to_db(BookStatus::Borrowed), book_id],
        )?;
        tx.execute(
            "INSERT INTO loans (book_title, username, borrow_date, return_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                title,
                username,
                format_timestamp(now),
                OPEN_LOAN_SENTINEL,
                loan_status_to_db(LoanStatus::Borrowed)
            ],
        )?;
        let loan_id = tx.last_insert_rowid();

        tx.commit()?;
        info!("event=loan_borrow module=lending status=ok book_id={book_id} loan_id={loan_id}");
        Ok(loan_id)
    }

    fn return_book(
        &mut self,
        book_id: BookId,
        username: &str,
        now: NaiveDateTime,
    ) -> RepoResult<Option<LoanRecord>> {
        let tx = self.conn.transaction()?;

        let title = book_title(&tx, book_id)?;
        tx.execute(
            "UPDATE books SET status = ?1 WHERE id = ?2;",
            params![book_status_to_db(BookStatus::Available), book_id],
        )?;

        let open_loan = {
            let mut stmt = tx.prepare(&format!(
                "{LOAN_SELECT_SQL}
                 WHERE book_title = ?1 AND username = ?2 AND status = ?3
                 ORDER BY id ASC
                 LIMIT 1;"
            ))?;
            let mut rows = stmt.query(params![
                title,
                username,
                loan_status_to_db(LoanStatus::Borrowed)
            ])?;
            match rows.next()? {
                Some(row) => Some(parse_loan_row(row)?),
                None => None,
            }
        };

        let settled = match open_loan {
            Some(mut record) => {
                let return_date = format_timestamp(now);
                tx.execute(
                    "UPDATE loans SET return_date = ?1, status = ?2 WHERE id = ?3;",
                    params![
                        return_date,
                        loan_status_to_db(LoanStatus::Returned),
                        record.id
                    ],
                )?;
                record.return_date = return_date;
                record.status = LoanStatus::Returned;
                Some(record)
            }
            None => None,
        };

        tx.commit()?;
        info!(
            "event=loan_return module=lending status=ok book_id={book_id} settled={}",
            settled.is_some()
        );
        Ok(settled)
    }

    fn list_loans(&self) -> RepoResult<Vec<LoanRecord>> {
        load_loans(self.conn)
    }
}

/// Full-collection read of the loan log; shared by the store and the
/// snapshot loader.
pub fn load_loans(conn: &Connection) -> RepoResult<Vec<LoanRecord>> {
    let mut stmt = conn.prepare(&format!("{LOAN_SELECT_SQL} ORDER BY id ASC;"))?;
    let mut rows = stmt.query([])?;
    let mut loans = Vec::new();

    while let Some(row) = rows.next()? {
        loans.push(parse_loan_row(row)?);
    }

    Ok(loans)
}

fn book_title(conn: &Connection, book_id: BookId) -> RepoResult<String> {
    let mut stmt = conn.prepare("SELECT title FROM books WHERE id = ?1;")?;
    let mut rows = stmt.query([book_id])?;
    if let Some(row) = rows.next()? {
        return Ok(row.get(0)?);
    }
    Err(RepoError::BookNotFound(book_id))
}

fn parse_loan_row(row: &Row<'_>) -> RepoResult<LoanRecord> {
    let status_text: String = row.get("status")?;
    let status = parse_loan_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in loans.status"))
    })?;

    Ok(LoanRecord {
        id: row.get("id")?,
        book_title: row.get("book_title")?,
        username: row.get("username")?,
        borrow_date: row.get("borrow_date")?,
        return_date: row.get("return_date")?,
        status,
    })
}

fn loan_status_to_db(status: LoanStatus) -> &'static str {
    match status {
        LoanStatus::Borrowed => "Borrowed",
        LoanStatus::Returned => "Returned",
    }
}

fn parse_loan_status(value: &str) -> Option<LoanStatus> {
    match value {
        "Borrowed" => Some(LoanStatus::Borrowed),
        "Returned" => Some(LoanStatus::Returned),
        _ => None,
    }
}
