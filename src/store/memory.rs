use async_trait::async_trait;
use tokio::sync::Mutex;

use super::error::Result;
use super::MessageStore;
use crate::models::Message;

/// In-process store; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    messages: Mutex<Vec<Message>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages: Mutex::new(messages),
        }
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Message>> {
        Ok(self.messages.lock().await.clone())
    }

    async fn save(&self, messages: &[Message]) -> Result<()> {
        *self.messages.lock().await = messages.to_vec();
        Ok(())
    }
}
