// GET /messages/ and GET /messages/unread handlers

use std::sync::Arc;

use tracing::debug;

use crate::service::MessageService;

pub async fn list_messages_handler(
    service: Arc<MessageService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let messages = service.list_all().await.map_err(warp::reject::custom)?;
    debug!(count = messages.len(), "GET /messages/");

    Ok(warp::reply::json(&messages))
}

pub async fn list_unread_handler(
    service: Arc<MessageService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let messages = service.list_unread().await.map_err(warp::reject::custom)?;
    debug!(count = messages.len(), "GET /messages/unread");

    Ok(warp::reply::json(&messages))
}
