//! GraphQL APIs
//!
//! Three independent schemas, each served by its own process:
//!
//! - [`events`]: books/authors with an `addBook` mutation and a `bookAdded`
//!   subscription fed by the catalog's event bus.
//! - [`crud`]: books/authors with full create/update/delete mutations.
//! - [`users`]: a single read-only `users` query.
//!
//! The schemas share no state. List fields keep the nullable `[T]` shape
//! existing clients were written against, see [`NullableList`].

pub mod crud;
pub mod errors;
pub mod events;
pub mod users;

pub use crud::CrudSchema;
pub use events::EventsSchema;
pub use users::UsersSchema;

/// A `[T]` list field: both the list and its items are nullable.
pub type NullableList<T> = Option<Vec<Option<T>>>;

/// Convert records into a [`NullableList`] of GraphQL objects
pub(crate) fn nullable_list<R, T>(records: impl IntoIterator<Item = R>) -> NullableList<T>
where
    T: From<R>,
{
    Some(records.into_iter().map(|r| Some(T::from(r))).collect())
}
