//! OpenAPI descriptor for tool integrations
//!
//! Only the create operation is described. Request and response schemas are
//! generated from [`CreateMessageRequest`] and [`Message`].

use schemars::schema_for;
use serde_json::{json, Value};

use crate::models::{CreateMessageRequest, Message};

/// Build the descriptor, advertising `server_url` when one is configured
pub fn openapi_document(server_url: Option<&str>) -> Value {
    let request_schema = schema_for!(CreateMessageRequest).schema;
    let message_schema = schema_for!(Message).schema;

    let mut document = json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Message API",
            "description": "API for sending messages",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/messages/": {
                "post": {
                    "summary": "Create a new message",
                    "operationId": "createMessage",
                    "security": [{ "ApiKeyAuth": [] }],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": { "schema": request_schema }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Message created successfully",
                            "content": {
                                "application/json": { "schema": message_schema }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "ApiKeyAuth": {
                    "type": "apiKey",
                    "in": "header",
                    "name": "X-API-Key"
                }
            }
        }
    });

    if let Some(url) = server_url {
        document["servers"] = json!([{ "url": url }]);
    }

    document
}
