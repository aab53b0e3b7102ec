// HTTP Server modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

// Chat command parsing and dispatch
pub mod commands;

// Image persistence
pub mod image_store;

// Intent classifier client
pub mod intent;
