use async_graphql::{Context, Object, Result};

use crate::db::{CreateBook, Database};

use super::EventsOptions;
use super::types::{AddBookInfo, AddBookResponse, Book, FieldError};

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book and announce it to `bookAdded` subscribers.
    ///
    /// `authorId` is not checked; a dangling id only surfaces when
    /// `Book.author` is resolved.
    async fn add_book(&self, ctx: &Context<'_>, addbookinfo: AddBookInfo) -> Result<AddBookResponse> {
        let db = ctx.data::<Database>()?;
        let options = ctx.data::<EventsOptions>()?;

        let record = db.books().create(CreateBook {
            name: addbookinfo.name,
            author_id: addbookinfo.author_id,
        });

        let errors = if options.legacy_add_book_error {
            vec![FieldError {
                field: "name".to_string(),
                message: "bad".to_string(),
            }]
        } else {
            Vec::new()
        };

        Ok(AddBookResponse {
            errors,
            book: Some(Book::from(record)),
        })
    }
}
