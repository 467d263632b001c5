//! Message persistence
//!
//! The whole collection is loaded and saved as one ordered document. There is
//! no indexing and no partial write: every mutation rewrites the full
//! collection. Callers that need read-modify-write consistency must serialize
//! their access (see [`crate::service::MessageService`]).

pub mod error;
pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::models::Message;

pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Backing store for the message collection
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Load the full collection in insertion order.
    ///
    /// A store that has never been written returns an empty collection.
    async fn load(&self) -> Result<Vec<Message>>;

    /// Replace the full collection with `messages`, preserving their order.
    async fn save(&self, messages: &[Message]) -> Result<()>;
}
