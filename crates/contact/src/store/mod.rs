use async_trait::async_trait;
use mailroom_shared::Result;

use crate::{ContactMessage, NewContactMessage};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Persistence for contact messages.
///
/// Each method is a single store operation. Implementations assign the id and
/// creation timestamp and own durability; callers never hold records between
/// calls.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persists a new unread message.
    async fn create(&self, draft: NewContactMessage) -> Result<ContactMessage>;

    /// Every message, newest first.
    async fn find_all(&self) -> Result<Vec<ContactMessage>>;

    /// Sets `is_read` on the message with the given id and returns it, or
    /// `None` when no message has that id.
    async fn mark_read(&self, id: &str) -> Result<Option<ContactMessage>>;

    /// Checks that the store can serve requests.
    async fn ping(&self) -> Result<()>;
}
