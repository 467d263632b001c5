// DELETE /messages/cleanup handler

use std::sync::Arc;

use crate::models::CleanupResponse;
use crate::service::MessageService;

pub async fn cleanup_handler(
    service: Arc<MessageService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let remaining = service.cleanup().await.map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&CleanupResponse {
        status: "success".to_string(),
        remaining_messages: remaining,
    }))
}
