// Handlers module

pub mod chat;
pub mod health;
pub mod images;
pub mod rejection;

pub use chat::chat_handler;
pub use health::health_handler;
pub use images::{list_images_handler, retrieve_image_handler, save_image_handler};
pub use rejection::handle_rejection;

use crate::error::ChatError;
use crate::models::{ChatResponse, ErrorResponse};
use warp::http::StatusCode;
use warp::Reply;

/// Turn a router outcome into a `{"response": ..}` or `{"error": ..}` reply
pub(crate) fn respond(result: Result<String, ChatError>) -> warp::reply::Response {
    match result {
        Ok(text) => warp::reply::with_status(
            warp::reply::json(&ChatResponse::new(text)),
            StatusCode::OK,
        )
        .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub(crate) fn error_reply(status: StatusCode, message: String) -> warp::reply::Response {
    if status.is_server_error() {
        tracing::error!(%status, error = %message, "request failed");
    } else {
        tracing::debug!(%status, error = %message, "request rejected");
    }
    warp::reply::with_status(warp::reply::json(&ErrorResponse { error: message }), status)
        .into_response()
}
