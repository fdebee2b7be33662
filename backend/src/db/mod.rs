//! In-memory catalog storage
//!
//! Books and authors live in process memory behind one lock. All reads and
//! writes go through the repositories handed out by [`Database`], so id
//! assignment and referential checks are serialized.

pub mod authors;
pub mod books;
pub mod error;
pub mod events;
pub mod seed;
pub mod users;

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

pub use authors::{AuthorRecord, AuthorRepository, CreateAuthor, UpdateAuthor};
pub use books::{BookRecord, BookRepository, CreateBook, UpdateBook};
pub use error::{CatalogError, EntityKind};
pub use events::{BookEventStream, BookEvents};
pub use users::UserRecord;

/// Catalog contents shared by every repository handle.
///
/// Records are keyed by id; ids only ever grow, so map order is also
/// insertion order.
#[derive(Debug, Default)]
pub(crate) struct CatalogState {
    pub(crate) books: BTreeMap<i32, BookRecord>,
    pub(crate) authors: BTreeMap<i32, AuthorRecord>,
    pub(crate) next_book_id: i32,
    pub(crate) next_author_id: i32,
}

impl CatalogState {
    fn seeded(books: Vec<BookRecord>, authors: Vec<AuthorRecord>) -> Self {
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;

        Self {
            books: books.into_iter().map(|b| (b.id, b)).collect(),
            authors: authors.into_iter().map(|a| (a.id, a)).collect(),
            next_book_id,
            next_author_id,
        }
    }
}

/// Handle to one in-memory catalog.
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Clone)]
pub struct Database {
    state: Arc<RwLock<CatalogState>>,
    events: Option<BookEvents>,
}

impl Database {
    /// Create a catalog holding the given records
    pub fn with_seed(books: Vec<BookRecord>, authors: Vec<AuthorRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState::seeded(books, authors))),
            events: None,
        }
    }

    /// Create a catalog with no books or authors
    pub fn empty() -> Self {
        Self::with_seed(Vec::new(), Vec::new())
    }

    /// Catalog backing the subscription service: 5 books, 3 authors, and a
    /// book event bus with room for `capacity` undelivered events per listener.
    pub fn events_catalog(capacity: usize) -> Self {
        Self::with_seed(seed::event_books(), seed::authors()).with_events(BookEvents::new(capacity))
    }

    /// Catalog backing the CRUD service: 12 books, 3 authors.
    pub fn crud_catalog() -> Self {
        Self::with_seed(seed::crud_books(), seed::authors())
    }

    /// Attach an event bus; every book created afterwards is published on it.
    pub fn with_events(mut self, events: BookEvents) -> Self {
        self.events = Some(events);
        self
    }

    /// The attached book event bus, if any
    pub fn events(&self) -> Option<&BookEvents> {
        self.events.as_ref()
    }

    /// Get a book repository
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.state.clone(), self.events.clone())
    }

    /// Get an author repository
    pub fn authors(&self) -> AuthorRepository {
        AuthorRepository::new(self.state.clone())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Database")
            .field("books", &state.books.len())
            .field("authors", &state.authors.len())
            .field("events", &self.events.is_some())
            .finish()
    }
}
