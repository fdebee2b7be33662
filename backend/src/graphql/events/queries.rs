use async_graphql::{Context, Object, Result};

use crate::db::Database;
use crate::graphql::{NullableList, nullable_list};

use super::types::{Author, Book};

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// All books
    async fn books(&self, ctx: &Context<'_>) -> Result<NullableList<Book>> {
        let db = ctx.data::<Database>()?;
        Ok(nullable_list(db.books().list()))
    }

    /// All authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<NullableList<Author>> {
        let db = ctx.data::<Database>()?;
        Ok(nullable_list(db.authors().list()))
    }
}
