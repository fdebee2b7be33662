//! Book event bus
//!
//! Fan-out of newly created books to every live listener. Listeners only see
//! books published after they subscribed; dropping the stream unsubscribes.

use futures::stream::BoxStream;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use super::BookRecord;

/// Default number of undelivered events buffered per listener
pub const DEFAULT_CAPACITY: usize = 256;

/// Stream of books published after the listener subscribed
pub type BookEventStream = BoxStream<'static, BookRecord>;

/// Publish/subscribe channel carrying newly added books
#[derive(Debug, Clone)]
pub struct BookEvents {
    sender: broadcast::Sender<BookRecord>,
}

impl BookEvents {
    /// Create a bus. A listener that falls more than `capacity` events behind
    /// skips the overwritten ones rather than stalling publishers.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Deliver a book to every current listener, returning how many there were.
    pub fn publish(&self, book: BookRecord) -> usize {
        let book_id = book.id;
        match self.sender.send(book) {
            Ok(listeners) => {
                tracing::debug!(book_id, listeners, "Published book event");
                listeners
            }
            Err(_) => {
                tracing::debug!(book_id, "Published book event with no listeners");
                0
            }
        }
    }

    /// Register a listener
    pub fn subscribe(&self) -> BookEventStream {
        let receiver = self.sender.subscribe();
        tracing::debug!(
            listeners = self.sender.receiver_count(),
            "Book event listener subscribed"
        );

        Box::pin(BroadcastStream::new(receiver).filter_map(|result| match result {
            Ok(book) => Some(book),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Book event listener lagged; events dropped");
                None
            }
        }))
    }

    /// Number of live listeners
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
