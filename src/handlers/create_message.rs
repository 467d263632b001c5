// POST /messages/ handler

use std::sync::Arc;

use tracing::debug;

use crate::models::CreateMessageRequest;
use crate::service::MessageService;

pub async fn create_message_handler(
    service: Arc<MessageService>,
    request: CreateMessageRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    debug!(sender = %request.sender, length = request.message.len(), "POST /messages/");

    let message = service
        .create(request)
        .await
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&message))
}
