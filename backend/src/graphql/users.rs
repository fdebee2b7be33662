//! Read-only users schema.

use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, ID, Object, Schema, SimpleObject};

use crate::db::{UserRecord, users};
use crate::graphql::{NullableList, nullable_list};

pub type UsersSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct User {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<&UserRecord> for User {
    fn from(r: &UserRecord) -> Self {
        Self {
            id: Some(ID(r.id.clone())),
            name: Some(r.name.clone()),
            email: Some(r.email.clone()),
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn users(&self) -> NullableList<User> {
        nullable_list(users::all())
    }
}

pub fn build_schema() -> UsersSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .extension(Tracing)
        .finish()
}
