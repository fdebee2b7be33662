//! Catalog error type

use std::fmt;

/// Which collection a failed lookup targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    Author,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Book => f.write_str("Book"),
            EntityKind::Author => f.write_str("Author"),
        }
    }
}

/// Failures returned by catalog mutations and required lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: EntityKind, id: i32 },

    /// The author is still referenced by `book_count` books.
    #[error("Author cannot be deleted because they have books.")]
    IntegrityViolation { author_id: i32, book_count: usize },
}

impl CatalogError {
    pub fn book_not_found(id: i32) -> Self {
        CatalogError::NotFound {
            entity: EntityKind::Book,
            id,
        }
    }

    pub fn author_not_found(id: i32) -> Self {
        CatalogError::NotFound {
            entity: EntityKind::Author,
            id,
        }
    }

    /// Machine-readable code surfaced in GraphQL error extensions
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "NOT_FOUND",
            CatalogError::IntegrityViolation { .. } => "INTEGRITY_VIOLATION",
        }
    }
}
