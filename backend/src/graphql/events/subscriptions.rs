use async_graphql::{Context, Result, Subscription};
use futures::{Stream, StreamExt};

use crate::db::BookEvents;

use super::types::Book;

#[derive(Default)]
pub struct SubscriptionRoot;

#[Subscription(name = "Subscription")]
impl SubscriptionRoot {
    /// Every book added after the subscription started, in the order added
    async fn book_added<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> Result<impl Stream<Item = Book> + 'ctx> {
        let events = ctx.data::<BookEvents>()?;
        Ok(events.subscribe().map(Book::from))
    }
}
