//! Message operations over a [`MessageStore`]
//!
//! Each operation loads the full collection, applies one transformation and,
//! for mutations, saves the whole collection back. Mutations hold an exclusive
//! guard for the entire load/transform/save sequence so concurrent requests
//! cannot overwrite each other's changes; reads share the guard.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::config::Limits;
use crate::error::ApiError;
use crate::models::{CreateMessageRequest, Message};
use crate::store::MessageStore;

pub struct MessageService {
    store: Arc<dyn MessageStore>,
    limits: Limits,
    guard: RwLock<()>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>, limits: Limits) -> Self {
        Self {
            store,
            limits,
            guard: RwLock::new(()),
        }
    }

    /// Append a new unread message.
    ///
    /// Validation runs before anything is written: an over-length body or a
    /// full store leaves the persisted collection untouched.
    pub async fn create(&self, request: CreateMessageRequest) -> Result<Message, ApiError> {
        let max = self.limits.max_message_length;
        if request.message.chars().count() > max {
            return Err(ApiError::MessageTooLong { max });
        }

        let _write = self.guard.write().await;
        let mut messages = self.store.load().await?;

        if messages.len() >= self.limits.max_messages {
            return Err(ApiError::CapacityReached {
                limit: self.limits.max_messages,
            });
        }

        let message = Message::new(request.sender, request.message);
        messages.push(message.clone());
        self.store.save(&messages).await?;

        info!(id = %message.id, sender = %message.sender, total = messages.len(), "message created");
        Ok(message)
    }

    /// Every stored message in insertion order
    pub async fn list_all(&self) -> Result<Vec<Message>, ApiError> {
        let _read = self.guard.read().await;
        Ok(self.store.load().await?)
    }

    /// Stored messages not yet marked read, in insertion order
    pub async fn list_unread(&self) -> Result<Vec<Message>, ApiError> {
        let _read = self.guard.read().await;
        let messages = self.store.load().await?;
        Ok(messages.into_iter().filter(|m| !m.read).collect())
    }

    /// Mark the first message with `id` as read. Marking twice is not an error.
    pub async fn mark_read(&self, id: Uuid) -> Result<(), ApiError> {
        let _write = self.guard.write().await;
        let mut messages = self.store.load().await?;

        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ApiError::NotFound(id))?;
        message.read = true;

        self.store.save(&messages).await?;
        info!(%id, "message marked read");
        Ok(())
    }

    /// Drop the oldest messages so at most `cleanup_retain` remain.
    ///
    /// Returns the number of messages left.
    pub async fn cleanup(&self) -> Result<usize, ApiError> {
        let _write = self.guard.write().await;
        let mut messages = self.store.load().await?;

        let overflow = messages.len().saturating_sub(self.limits.cleanup_retain);
        messages.drain(..overflow);

        self.store.save(&messages).await?;
        info!(removed = overflow, remaining = messages.len(), "cleanup finished");
        Ok(messages.len())
    }
}
