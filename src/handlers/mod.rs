// Handlers module

pub mod cleanup;
pub mod create_message;
pub mod get_openapi;
pub mod list_messages;
pub mod mark_read;

pub use cleanup::cleanup_handler;
pub use create_message::create_message_handler;
pub use get_openapi::get_openapi_handler;
pub use list_messages::{list_messages_handler, list_unread_handler};
pub use mark_read::mark_read_handler;
