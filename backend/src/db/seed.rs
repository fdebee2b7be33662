//! Seed data loaded at startup.
//!
//! Nothing is persisted, so every process start begins from these records.

use super::{AuthorRecord, BookRecord};

const BASE_BOOKS: &[(i32, &str, i32)] = &[
    (1, "Harry Potter and the Chamber of Secrets", 1),
    (2, "The Lord of the Rings: The Fellowship of the Ring", 2),
    (3, "The Catcher in the Rye", 1),
    (4, "To Kill a Mockingbird", 3),
    (5, "The Great Gatsby", 2),
];

const EXTRA_BOOKS: &[(i32, &str, i32)] = &[
    (6, "1984", 1),
    (7, "Pride and Prejudice", 2),
    (8, "The Hobbit", 2),
    (9, "Little Women", 3),
    (10, "Animal Farm", 1),
    (11, "Moby-Dick", 2),
    (12, "The Adventures of Huckleberry Finn", 1),
];

const AUTHORS: &[(i32, &str)] = &[(1, "J.K. Rowling"), (2, "J.R.R. Tolkien"), (3, "Harper Lee")];

fn to_books(rows: &'static [(i32, &'static str, i32)]) -> impl Iterator<Item = BookRecord> {
    rows.iter().map(|&(id, name, author_id)| BookRecord {
        id,
        name: name.to_string(),
        author_id,
    })
}

/// The five books served by the subscription service
pub fn event_books() -> Vec<BookRecord> {
    to_books(BASE_BOOKS).collect()
}

/// The twelve books served by the CRUD service
pub fn crud_books() -> Vec<BookRecord> {
    to_books(BASE_BOOKS).chain(to_books(EXTRA_BOOKS)).collect()
}

pub fn authors() -> Vec<AuthorRecord> {
    AUTHORS
        .iter()
        .map(|&(id, name)| AuthorRecord {
            id,
            name: name.to_string(),
        })
        .collect()
}
