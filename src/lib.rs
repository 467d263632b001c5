// HTTP Server modules
pub mod auth;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;

// Configuration and logging
pub mod config;
pub mod logging;

// Message persistence
pub mod service;
pub mod store;
