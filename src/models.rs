// Data structures (Message, request and response bodies)

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Stored message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Message {
    pub id: Uuid,
    /// Name of the message sender
    pub sender: String,
    /// Content of the message
    #[serde(rename = "message")]
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Build a fresh unread message with a server-assigned id and timestamp
    pub fn new(sender: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            body,
            read: false,
            timestamp: Utc::now(),
        }
    }
}

// Request Types
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateMessageRequest {
    /// Name of the message sender
    pub sender: String,
    /// Content of the message
    pub message: String,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleanupResponse {
    pub status: String,
    pub remaining_messages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}
