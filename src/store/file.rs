use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::error::{Result, StoreError};
use super::MessageStore;
use crate::models::Message;

/// Stores the collection as a single JSON array on disk.
///
/// `save` truncates and rewrites the file in place. A crash mid-write can
/// leave a truncated document, which the next `load` reports as
/// [`StoreError::Malformed`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl MessageStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Message>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "message document missing, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.display_path(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.display_path(),
            source,
        })
    }

    async fn save(&self, messages: &[Message]) -> Result<()> {
        let bytes = serde_json::to_vec(messages)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| StoreError::Io {
                path: self.display_path(),
                source,
            })?;
        debug!(path = %self.path.display(), count = messages.len(), "message document saved");
        Ok(())
    }
}
