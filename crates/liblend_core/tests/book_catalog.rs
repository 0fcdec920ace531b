use liblend_core::db::open_db_in_memory;
use liblend_core::{
    filter_books, Book, BookDraft, BookRepository, BookStatus, CatalogFilter, CatalogService,
    RepoError, SqliteBookRepository, ValidationError,
};

#[test]
fn add_and_get_roundtrip_forces_available_status() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::new(&conn));

    let draft = BookDraft::new("Dune", "Frank Herbert", "Fiction");
    let id = catalog.add_book(&draft).unwrap();

    let book = catalog.get_book(id).unwrap().unwrap();
    assert_eq!(book.id, id);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.category, "Fiction");
    assert_eq!(book.status, BookStatus::Available);
    assert_eq!(book.rating, None);
}

#[test]
fn store_assigned_ids_continue_past_the_seeded_catalog() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let id = repo
        .add_book(&BookDraft::new("Dune", "Frank Herbert", "Fiction"))
        .unwrap();
    assert_eq!(id, 5, "seed installs ids 1..=4");

    // Deleted ids are not reused.
    repo.delete_book(id).unwrap();
    let next = repo
        .add_book(&BookDraft::new("Hyperion", "Dan Simmons", "Fiction"))
        .unwrap();
    assert_eq!(next, 6);
}

#[test]
fn blank_required_fields_are_rejected_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);
    let before = repo.list_books().unwrap().len();

    let err = repo
        .add_book(&BookDraft::new("  ", "Frank Herbert", "Fiction"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingTitle)
    ));

    let err = repo
        .add_book(&BookDraft::new("Dune", "", "Fiction"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingAuthor)
    ));

    assert_eq!(repo.list_books().unwrap().len(), before);
}

#[test]
fn delete_missing_book_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let err = repo.delete_book(999).unwrap_err();
    assert!(matches!(err, RepoError::BookNotFound(999)));
}

#[test]
fn rating_is_persisted_and_range_checked() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::new(&conn));

    let id = catalog
        .add_book(&BookDraft::new("Dune", "Frank Herbert", "Fiction"))
        .unwrap();

    catalog.set_rating(id, 4).unwrap();
    let book = catalog.get_book(id).unwrap().unwrap();
    assert_eq!(book.rating, Some(4));

    let err = catalog.set_rating(id, 6).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::RatingOutOfRange(6))
    ));
    let err = catalog.set_rating(id, 0).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::RatingOutOfRange(0))
    ));

    // Failed updates leave the stored rating untouched.
    let book = catalog.get_book(id).unwrap().unwrap();
    assert_eq!(book.rating, Some(4));
}

#[test]
fn filter_matches_search_term_over_title_and_author() {
    let books = seeded_books();

    let by_title = filter_books(
        &books,
        &CatalogFilter {
            search: Some("sapiens".to_string()),
            ..CatalogFilter::default()
        },
    );
    assert_eq!(collect_titles(&by_title), vec!["Sapiens"]);

    let by_author = filter_books(
        &books,
        &CatalogFilter {
            search: Some("verma".to_string()),
            ..CatalogFilter::default()
        },
    );
    assert_eq!(collect_titles(&by_author), vec!["Physics Vol-1"]);
}

#[test]
fn filter_combines_category_and_status() {
    let mut books = seeded_books();
    books[2].status = BookStatus::Borrowed;

    let fiction = filter_books(
        &books,
        &CatalogFilter {
            category: Some("Fiction".to_string()),
            ..CatalogFilter::default()
        },
    );
    assert_eq!(collect_titles(&fiction), vec!["The Great Gatsby"]);

    let borrowed = filter_books(
        &books,
        &CatalogFilter {
            status: Some(BookStatus::Borrowed),
            ..CatalogFilter::default()
        },
    );
    assert_eq!(collect_titles(&borrowed), vec!["Sapiens"]);

    let empty = filter_books(
        &books,
        &CatalogFilter {
            category: Some("Fiction".to_string()),
            status: Some(BookStatus::Borrowed),
            ..CatalogFilter::default()
        },
    );
    assert!(empty.is_empty());
}

#[test]
fn empty_filter_matches_everything() {
    let books = seeded_books();
    let all = filter_books(&books, &CatalogFilter::default());
    assert_eq!(all.len(), books.len());
}

fn seeded_books() -> Vec<Book> {
    let conn = open_db_in_memory().unwrap();
    SqliteBookRepository::new(&conn).list_books().unwrap()
}

fn collect_titles(books: &[&Book]) -> Vec<String> {
    books.iter().map(|book| book.title.clone()).collect()
}
