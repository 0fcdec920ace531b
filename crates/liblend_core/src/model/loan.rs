//! Loan record model and overdue/fine derivation.
//!
//! # Responsibility
//! - Define the loan record (one borrow-to-return cycle per row).
//! - Own timestamp formatting and the day-count/fine arithmetic every
//!   derived figure (duration, days overdue, fine) is computed with.
//!
//! # Invariants
//! - `return_date` is the `"-"` sentinel exactly while `status` is
//!   `Borrowed`, and a formatted timestamp once `Returned`.
//! - Day counts use ceiling on the absolute millisecond difference, never
//!   floor or calendar-date subtraction. All derived figures share this
//!   one rule so views never disagree.
//! - Nothing is stored incrementally: overdue state and fines are always
//!   recomputed on demand from the stored borrow timestamp.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Stable store-assigned identifier for a loan record.
pub type LoanId = i64;

/// Sentinel stored in `return_date` while a loan is still open.
pub const OPEN_LOAN_SENTINEL: &str = "-";

/// Storage format for borrow/return timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Days a loan may run before fines start accruing. The overdue report
/// uses the same threshold so the two views never disagree.
pub const LOAN_PERIOD_DAYS: i64 = 5;

/// Fine accrued per day beyond the loan period, in currency units.
pub const FINE_PER_DAY: i64 = 10;

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Lifecycle state of one loan record.
///
/// `Returned` is terminal for the record; the book itself cycles back to
/// available and a future borrow creates a fresh record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    Borrowed,
    Returned,
}

/// One borrow-to-return cycle for a (book title, borrower) pair.
///
/// `book_title` is a denormalized join key on `Book::title`, kept for
/// parity with the original data model; duplicate titles are therefore
/// indistinguishable in the loan log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: LoanId,
    pub book_title: String,
    pub username: String,
    pub borrow_date: String,
    pub return_date: String,
    pub status: LoanStatus,
}

impl LoanRecord {
    /// Returns whether this loan is still open (book not yet returned).
    pub fn is_open(&self) -> bool {
        self.status == LoanStatus::Borrowed
    }
}

/// Formats a timestamp for storage.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a stored timestamp; `None` for the open-loan sentinel or any
/// value that does not match the storage format.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// Whole days between two instants: ceiling on the absolute millisecond
/// difference. Symmetric in its arguments and monotonically non-decreasing
/// as either end moves away from the other.
pub fn elapsed_days(borrow: NaiveDateTime, reference: NaiveDateTime) -> i64 {
    let millis = (reference - borrow).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Fine owed for a loan that ran `days` days: zero within the loan
/// period, `FINE_PER_DAY` per day beyond it.
pub fn fine_for_days(days: i64) -> i64 {
    if days > LOAN_PERIOD_DAYS {
        (days - LOAN_PERIOD_DAYS) * FINE_PER_DAY
    } else {
        0
    }
}
