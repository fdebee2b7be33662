//! Books/authors schema with a `bookAdded` subscription.

mod mutations;
mod queries;
mod subscriptions;
pub mod types;

use async_graphql::Schema;
use async_graphql::extensions::Tracing;

use crate::db::Database;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;
pub use subscriptions::SubscriptionRoot;

pub type EventsSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Behavior switches for the events schema
#[derive(Debug, Clone, Copy)]
pub struct EventsOptions {
    /// Attach `{field: "name", message: "bad"}` to every `addBook` response,
    /// as existing clients of this API have always received it.
    pub legacy_add_book_error: bool,
}

impl Default for EventsOptions {
    fn default() -> Self {
        Self {
            legacy_add_book_error: true,
        }
    }
}

/// Build the schema over `db`. The `bookAdded` subscription listens on the
/// event bus attached to `db`; without one, subscribing fails.
pub fn build_schema(db: Database, options: EventsOptions) -> EventsSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .extension(Tracing)
        .data(options);

    if let Some(events) = db.events() {
        builder = builder.data(events.clone());
    }

    builder.data(db).finish()
}
