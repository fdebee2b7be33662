//! GraphQL types for the CRUD schema

use async_graphql::{Context, Object, Result};

use crate::db::{AuthorRecord, BookRecord, Database};
use crate::graphql::{NullableList, nullable_list};

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

/// This represents a book written by an author
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

    /// Null when `authorId` matches no author
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let db = ctx.data::<Database>()?;
        Ok(db.authors().get(self.author_id).map(Author::from))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Legacy `authors` shape: a book's id and title presented as an author
impl From<BookRecord> for Author {
    fn from(r: BookRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

/// This represents an author of a book
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }

    /// Books whose `authorId` is this author
    async fn books(&self, ctx: &Context<'_>) -> Result<NullableList<Book>> {
        let db = ctx.data::<Database>()?;
        Ok(nullable_list(db.books().list_by_author(self.id)))
    }
}
