// Route definitions and handlers

use std::convert::Infallible;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;
use warp::Filter;

use crate::auth::with_api_key;
use crate::error::handle_rejection;
use crate::handlers;
use crate::service::MessageService;

/// Largest accepted request body in bytes
pub const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn configure_routes(
    service: Arc<MessageService>,
    api_key: Arc<str>,
    openapi: Arc<Value>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let with_service = warp::any().map(move || service.clone());
    let with_openapi = warp::any().map(move || openapi.clone());

    // Everything under /messages requires the API key
    let messages = warp::path("messages")
        .and(with_api_key(api_key))
        .and(with_service);

    // POST /messages/
    let create_message = messages
        .clone()
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handlers::create_message_handler);

    // GET /messages/
    let list_messages = messages
        .clone()
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::list_messages_handler);

    // GET /messages/unread
    let list_unread = messages
        .clone()
        .and(warp::path("unread"))
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::list_unread_handler);

    // PUT /messages/{id}/read
    let mark_read = messages
        .clone()
        .and(warp::path::param::<Uuid>())
        .and(warp::path("read"))
        .and(warp::path::end())
        .and(warp::put())
        .and_then(handlers::mark_read_handler);

    // DELETE /messages/cleanup
    let cleanup = messages
        .and(warp::path("cleanup"))
        .and(warp::path::end())
        .and(warp::delete())
        .and_then(handlers::cleanup_handler);

    // GET /.well-known/openapi.yaml
    let openapi = warp::path(".well-known")
        .and(warp::path("openapi.yaml"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_openapi)
        .and_then(handlers::get_openapi_handler);

    let log = warp::log::custom(|info| {
        tracing::info!(
            method = %info.method(),
            path = info.path(),
            status = info.status().as_u16(),
            elapsed_ms = info.elapsed().as_millis() as u64,
            "request"
        );
    });

    // Combine routes
    openapi
        .or(create_message)
        .or(list_messages)
        .or(list_unread)
        .or(mark_read)
        .or(cleanup)
        .recover(handle_rejection)
        .with(log)
}
