use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::db::{CreateAuthor, CreateBook, Database, UpdateAuthor, UpdateBook};

use super::types::{Author, Book};

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Result<Option<Book>> {
        let db = ctx.data::<Database>()?;
        let record = db.books().create(CreateBook { name, author_id });
        Ok(Some(Book::from(record)))
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Option<Author>> {
        let db = ctx.data::<Database>()?;
        let record = db.authors().create(CreateAuthor { name });
        Ok(Some(Author::from(record)))
    }

    /// Update a book
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        author_id: i32,
    ) -> Result<Option<Book>> {
        let db = ctx.data::<Database>()?;
        let record = db
            .books()
            .update(id, UpdateBook { name, author_id })
            .map_err(|e| e.extend())?;
        Ok(Some(Book::from(record)))
    }

    /// Update an author
    async fn update_author(&self, ctx: &Context<'_>, id: i32, name: String) -> Result<Option<Author>> {
        let db = ctx.data::<Database>()?;
        let record = db
            .authors()
            .update(id, UpdateAuthor { name })
            .map_err(|e| e.extend())?;
        Ok(Some(Author::from(record)))
    }

    /// Delete a book
    async fn delete_book(&self, ctx: &Context<'_>, id: i32) -> Result<Option<String>> {
        let db = ctx.data::<Database>()?;
        db.books().delete(id).map_err(|e| e.extend())?;
        Ok(Some(format!("Deleted book with ID {id}.")))
    }

    /// Delete an Author
    async fn delete_author(&self, ctx: &Context<'_>, id: i32) -> Result<Option<String>> {
        let db = ctx.data::<Database>()?;
        db.authors().delete(id).map_err(|e| e.extend())?;
        Ok(Some(format!("Deleted author with ID {id}.")))
    }
}
