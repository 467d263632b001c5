// PUT /messages/{id}/read handler

use std::sync::Arc;

use uuid::Uuid;

use crate::models::StatusResponse;
use crate::service::MessageService;

pub async fn mark_read_handler(
    service: Arc<MessageService>,
    id: Uuid,
) -> Result<impl warp::Reply, warp::Rejection> {
    service.mark_read(id).await.map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&StatusResponse::success()))
}
