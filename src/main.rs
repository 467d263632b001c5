use std::sync::Arc;

use message_api::config::Config;
use message_api::logging::init_tracing;
use message_api::openapi::openapi_document;
use message_api::routes::configure_routes;
use message_api::service::MessageService;
use message_api::store::JsonFileStore;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = Arc::new(JsonFileStore::new(&config.messages_file));
    let service = Arc::new(MessageService::new(store, config.limits));
    let openapi = Arc::new(openapi_document(config.public_url.as_deref()));
    let routes = configure_routes(service, Arc::from(config.api_key.as_str()), openapi);

    info!(
        addr = %config.bind_addr,
        messages_file = %config.messages_file.display(),
        "starting message API"
    );
    warp::serve(routes).run(config.bind_addr).await;
}
