//! Author repository

use std::sync::Arc;

use parking_lot::RwLock;

use super::{CatalogError, CatalogState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthor {
    pub name: String,
}

/// Author repository for catalog operations
pub struct AuthorRepository {
    state: Arc<RwLock<CatalogState>>,
}

impl AuthorRepository {
    pub(crate) fn new(state: Arc<RwLock<CatalogState>>) -> Self {
        Self { state }
    }

    /// All authors in id order
    pub fn list(&self) -> Vec<AuthorRecord> {
        self.state.read().authors.values().cloned().collect()
    }

    pub fn get(&self, id: i32) -> Option<AuthorRecord> {
        self.state.read().authors.get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.state.read().authors.len()
    }

    /// Insert a new author under the next free id
    pub fn create(&self, input: CreateAuthor) -> AuthorRecord {
        let mut state = self.state.write();
        let id = state.next_author_id;
        state.next_author_id += 1;

        let record = AuthorRecord {
            id,
            name: input.name,
        };
        state.authors.insert(id, record.clone());
        drop(state);

        tracing::info!(author_id = id, "Created author: {}", record.name);
        record
    }

    pub fn update(&self, id: i32, input: UpdateAuthor) -> Result<AuthorRecord, CatalogError> {
        let mut state = self.state.write();
        let slot = state
            .authors
            .get_mut(&id)
            .ok_or_else(|| CatalogError::author_not_found(id))?;

        slot.name = input.name;
        let record = slot.clone();
        drop(state);

        tracing::info!(author_id = id, "Updated author");
        Ok(record)
    }

    /// Remove an author that no book refers to.
    ///
    /// The reference check and the removal happen under one write lock.
    pub fn delete(&self, id: i32) -> Result<AuthorRecord, CatalogError> {
        let mut state = self.state.write();
        if !state.authors.contains_key(&id) {
            return Err(CatalogError::author_not_found(id));
        }

        let book_count = state.books.values().filter(|b| b.author_id == id).count();
        if book_count > 0 {
            tracing::warn!(author_id = id, book_count, "Refusing to delete referenced author");
            return Err(CatalogError::IntegrityViolation {
                author_id: id,
                book_count,
            });
        }

        let removed = state
            .authors
            .remove(&id)
            .ok_or_else(|| CatalogError::author_not_found(id))?;
        drop(state);

        tracing::info!(author_id = id, "Deleted author");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::db::{CreateBook, Database, EntityKind};

    use super::*;

    #[test]
    fn test_create_then_get_round_trip() {
        let db = Database::crud_catalog();
        let author = db.authors().create(CreateAuthor {
            name: "X".to_string(),
        });

        assert_eq!(author.id, 4);
        assert_eq!(db.authors().get(4).map(|a| a.name), Some("X".to_string()));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let db = Database::crud_catalog();
        let result = db.authors().update(
            9,
            UpdateAuthor {
                name: "Nobody".to_string(),
            },
        );
        assert_matches!(
            result,
            Err(CatalogError::NotFound {
                entity: EntityKind::Author,
                id: 9
            })
        );
    }

    #[test]
    fn test_delete_referenced_author_is_rejected() {
        let db = Database::crud_catalog();

        let result = db.authors().delete(3);

        assert_matches!(
            result,
            Err(CatalogError::IntegrityViolation {
                author_id: 3,
                book_count: 2
            })
        );
        assert_eq!(db.authors().count(), 3);
        assert_eq!(db.books().count(), 12);
    }

    #[test]
    fn test_delete_unreferenced_author() {
        let db = Database::crud_catalog();
        let author = db.authors().create(CreateAuthor {
            name: "Mary Shelley".to_string(),
        });

        let removed = db.authors().delete(author.id).unwrap();

        assert_eq!(removed, author);
        assert!(db.authors().get(author.id).is_none());
    }

    #[test]
    fn test_delete_after_books_removed() {
        let db = Database::crud_catalog();
        db.books().delete(4).unwrap();
        db.books().delete(9).unwrap();

        assert!(db.authors().delete(3).is_ok());
    }

    #[test]
    fn test_delete_missing_checked_before_references() {
        let db = Database::empty();
        db.books().create(CreateBook {
            name: "Dangling".to_string(),
            author_id: 5,
        });

        assert_matches!(
            db.authors().delete(5),
            Err(CatalogError::NotFound {
                entity: EntityKind::Author,
                id: 5
            })
        );
    }
}
