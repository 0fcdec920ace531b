//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `liblend_core` wiring.
//! - Open a throwaway seeded library and print its snapshot summary.

use liblend_core::db::open_db_in_memory;
use liblend_core::Snapshot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let snapshot = Snapshot::load(&conn)?;

    println!("liblend_core version={}", liblend_core::core_version());
    println!(
        "seeded books={} users={} loans={}",
        snapshot.books.len(),
        snapshot.users.len(),
        snapshot.loans.len()
    );
    for book in &snapshot.books {
        println!("  [{}] {} ({:?})", book.id, book.title, book.status);
    }

    Ok(())
}
