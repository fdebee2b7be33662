use async_graphql::{Context, Object, Result};

use crate::db::Database;
use crate::graphql::{NullableList, nullable_list};

use super::CrudOptions;
use super::types::{Author, Book};

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A Single Book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        let db = ctx.data::<Database>()?;
        Ok(id.and_then(|id| db.books().get(id)).map(Book::from))
    }

    /// List of All books
    async fn books(&self, ctx: &Context<'_>) -> Result<NullableList<Book>> {
        let db = ctx.data::<Database>()?;
        Ok(nullable_list(db.books().list()))
    }

    /// A Single Author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        let db = ctx.data::<Database>()?;
        Ok(id.and_then(|id| db.authors().get(id)).map(Author::from))
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<NullableList<Author>> {
        let db = ctx.data::<Database>()?;
        let options = ctx.data::<CrudOptions>()?;

        if options.legacy_authors_query {
            return Ok(nullable_list(db.books().list()));
        }
        Ok(nullable_list(db.authors().list()))
    }
}
