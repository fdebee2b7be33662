//! Books/authors schema with create/update/delete mutations.

mod mutations;
mod queries;
pub mod types;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, Schema};

use crate::db::Database;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;

pub type CrudSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Behavior switches for the CRUD schema
#[derive(Debug, Clone, Copy, Default)]
pub struct CrudOptions {
    /// Answer `authors` with the books collection shaped as authors, matching
    /// what older deployments returned.
    pub legacy_authors_query: bool,
}

pub fn build_schema(db: Database, options: CrudOptions) -> CrudSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(options)
        .data(db)
        .finish()
}
