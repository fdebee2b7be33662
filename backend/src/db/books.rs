//! Book repository

use std::sync::Arc;

use parking_lot::RwLock;

use super::{BookEvents, CatalogError, CatalogState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateBook {
    pub name: String,
    pub author_id: i32,
}

/// Full replacement of a book's fields; there is no partial update.
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub name: String,
    pub author_id: i32,
}

/// Book repository for catalog operations
pub struct BookRepository {
    state: Arc<RwLock<CatalogState>>,
    events: Option<BookEvents>,
}

impl BookRepository {
    pub(crate) fn new(state: Arc<RwLock<CatalogState>>, events: Option<BookEvents>) -> Self {
        Self { state, events }
    }

    /// All books in id order
    pub fn list(&self) -> Vec<BookRecord> {
        self.state.read().books.values().cloned().collect()
    }

    pub fn get(&self, id: i32) -> Option<BookRecord> {
        self.state.read().books.get(&id).cloned()
    }

    /// Books written by the given author, in id order
    pub fn list_by_author(&self, author_id: i32) -> Vec<BookRecord> {
        self.state
            .read()
            .books
            .values()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.state.read().books.len()
    }

    /// Insert a new book under the next free id.
    ///
    /// `author_id` is stored as given; it is not checked against the author
    /// collection. If an event bus is attached the book is published before
    /// the write lock is released, so listeners see books in id order.
    pub fn create(&self, input: CreateBook) -> BookRecord {
        let mut state = self.state.write();
        let id = state.next_book_id;
        state.next_book_id += 1;

        let record = BookRecord {
            id,
            name: input.name,
            author_id: input.author_id,
        };
        state.books.insert(id, record.clone());

        if let Some(events) = &self.events {
            events.publish(record.clone());
        }
        drop(state);

        tracing::info!(
            book_id = record.id,
            author_id = record.author_id,
            "Created book: {}",
            record.name
        );
        record
    }

    /// Replace every field of an existing book
    pub fn update(&self, id: i32, input: UpdateBook) -> Result<BookRecord, CatalogError> {
        let mut state = self.state.write();
        let slot = state
            .books
            .get_mut(&id)
            .ok_or_else(|| CatalogError::book_not_found(id))?;

        *slot = BookRecord {
            id,
            name: input.name,
            author_id: input.author_id,
        };
        let record = slot.clone();
        drop(state);

        tracing::info!(book_id = id, author_id = record.author_id, "Updated book");
        Ok(record)
    }

    /// Remove a book, returning the removed record
    pub fn delete(&self, id: i32) -> Result<BookRecord, CatalogError> {
        let removed = self
            .state
            .write()
            .books
            .remove(&id)
            .ok_or_else(|| CatalogError::book_not_found(id))?;

        tracing::info!(book_id = id, "Deleted book");
        Ok(removed)
    }
}
