//! GraphQL types for the events schema

use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result, SimpleObject};

use crate::db::{AuthorRecord, BookRecord, CatalogError, Database};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            author_id: r.author_id,
        }
    }
}

#[Object]
impl Book {
    async fn id(&self) -> i32 {
        self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn author_id(&self) -> i32 {
        self.author_id
    }

    /// The book's author. Fails when `authorId` matches no author.
    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        let db = ctx.data::<Database>()?;
        db.authors()
            .get(self.author_id)
            .map(Author::from)
            .ok_or_else(|| CatalogError::author_not_found(self.author_id).extend())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl From<AuthorRecord> for Author {
    fn from(r: AuthorRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

/// A problem with one input field of a mutation
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Error")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct AddBookResponse {
    pub errors: Vec<FieldError>,
    pub book: Option<Book>,
}

#[derive(Debug, Clone, InputObject)]
pub struct AddBookInfo {
    pub name: String,
    pub author_id: i32,
}
