//! Conversion of catalog errors into GraphQL errors.
//!
//! Every [`CatalogError`] becomes a field error whose `extensions.code` is
//! `NOT_FOUND` or `INTEGRITY_VIOLATION`.

use async_graphql::{Error, ErrorExtensions};

use crate::db::CatalogError;

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            match self {
                CatalogError::NotFound { entity, id } => {
                    e.set("entity", entity.to_string());
                    e.set("id", *id);
                }
                CatalogError::IntegrityViolation {
                    author_id,
                    book_count,
                } => {
                    e.set("authorId", *author_id);
                    e.set("bookCount", *book_count as i64);
                }
            }
        })
    }
}
