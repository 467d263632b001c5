// GET /.well-known/openapi.yaml handler

use std::convert::Infallible;
use std::sync::Arc;

use serde_json::Value;

/// Serve the prebuilt descriptor; no authentication
pub async fn get_openapi_handler(document: Arc<Value>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(document.as_ref()))
}
