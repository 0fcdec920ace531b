//! Lending use-case service: borrow, return, history and overdue views.
//!
//! # Responsibility
//! - Drive the borrow/return lifecycle through the lending store.
//! - Derive fines, loan durations and the overdue report on demand from
//!   stored borrow timestamps.
//!
//! # Invariants
//! - Fines are computed at return time from the settled record's borrow
//!   date and are never stored.
//! - All day counts use the shared ceiling-on-absolute-difference rule
//!   from `model::loan`, so receipt, history and report never disagree.

use crate::model::book::BookId;
use crate::model::loan::{
    elapsed_days, fine_for_days, parse_timestamp, LoanId, LoanRecord, LOAN_PERIOD_DAYS,
    OPEN_LOAN_SENTINEL,
};
use crate::repo::lending_store::LendingStore;
use crate::repo::{RepoError, RepoResult};
use chrono::{Local, NaiveDateTime};

/// Outcome of a return: the settled record (if an open loan matched) and
/// the fine owed for it.
///
/// A receipt with `settled: None` means the book status was still flipped
/// to Available; see the lending store's tolerated-inconsistency note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub settled: Option<LoanRecord>,
    pub fine: i64,
}

/// One loan in a per-title history view, annotated with how many days it
/// ran (to its return date, or to the reference instant while open).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanHistoryEntry {
    pub record: LoanRecord,
    pub duration_days: i64,
}

/// One open loan past the loan period, annotated with elapsed days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueEntry {
    pub record: LoanRecord,
    pub days_overdue: i64,
}

/// Lending service facade over a lending store implementation.
pub struct LendingService<S: LendingStore> {
    store: S,
}

impl<S: LendingStore> LendingService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows a book at the current wall-clock instant.
    pub fn borrow(&mut self, book_id: BookId, username: &str) -> RepoResult<LoanId> {
        self.borrow_at(book_id, username, Local::now().naive_local())
    }

    /// Borrows a book at a caller-supplied instant.
    pub fn borrow_at(
        &mut self,
        book_id: BookId,
        username: &str,
        now: NaiveDateTime,
    ) -> RepoResult<LoanId> {
        self.store.borrow_book(book_id, username, now)
    }

    /// Returns a book at the current wall-clock instant.
    pub fn return_book(&mut self, book_id: BookId, username: &str) -> RepoResult<ReturnReceipt> {
        self.return_book_at(book_id, username, Local::now().naive_local())
    }

    /// Returns a book at a caller-supplied instant and computes the fine
    /// from the settled record's borrow date.
    pub fn return_book_at(
        &mut self,
        book_id: BookId,
        username: &str,
        now: NaiveDateTime,
    ) -> RepoResult<ReturnReceipt> {
        let settled = self.store.return_book(book_id, username, now)?;

        let fine = match &settled {
            Some(record) => {
                let borrowed_at = parse_borrow_date(record)?;
                fine_for_days(elapsed_days(borrowed_at, now))
            }
            None => 0,
        };

        Ok(ReturnReceipt { settled, fine })
    }

    /// Full-collection read of the loan log.
    pub fn list_loans(&self) -> RepoResult<Vec<LoanRecord>> {
        self.store.list_loans()
    }

    /// All loans whose title matches, each annotated with its duration in
    /// days: borrow date to return date, or to `now` while still open.
    pub fn history(&self, book_title: &str, now: NaiveDateTime) -> RepoResult<Vec<LoanHistoryEntry>> {
        let mut entries = Vec::new();

        for record in self.store.list_loans()? {
            if record.book_title != book_title {
                continue;
            }

            let borrowed_at = parse_borrow_date(&record)?;
            let end = if record.return_date == OPEN_LOAN_SENTINEL {
                now
            } else {
                parse_timestamp(&record.return_date).ok_or_else(|| {
                    RepoError::InvalidData(format!(
                        "unparseable return date `{}` in loan {}",
                        record.return_date, record.id
                    ))
                })?
            };

            let duration_days = elapsed_days(borrowed_at, end);
            entries.push(LoanHistoryEntry {
                record,
                duration_days,
            });
        }

        Ok(entries)
    }

    /// Open loans that have run past the loan period, annotated with
    /// elapsed days. Uses the same threshold as the fine computation.
    pub fn overdue_report(&self, now: NaiveDateTime) -> RepoResult<Vec<OverdueEntry>> {
        let mut entries = Vec::new();

        for record in self.store.list_loans()? {
            if !record.is_open() {
                continue;
            }

            let borrowed_at = parse_borrow_date(&record)?;
            let days = elapsed_days(borrowed_at, now);
            if days > LOAN_PERIOD_DAYS {
                entries.push(OverdueEntry {
                    record,
                    days_overdue: days,
                });
            }
        }

        Ok(entries)
    }
}

fn parse_borrow_date(record: &LoanRecord) -> RepoResult<NaiveDateTime> {
    parse_timestamp(&record.borrow_date).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "unparseable borrow date `{}` in loan {}",
            record.borrow_date, record.id
        ))
    })
}
