// Route definitions

use crate::commands::CommandRouter;
use crate::handlers;
use std::convert::Infallible;
use warp::Filter;

/// Largest accepted JSON request body
pub const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn configure_routes(
    router: CommandRouter,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // POST /chat
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_router(router.clone()))
        .and_then(handlers::chat_handler);

    // POST /save-image
    let save_image = warp::path("save-image")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_router(router.clone()))
        .and_then(handlers::save_image_handler);

    // POST /retrieve-image
    let retrieve_image = warp::path("retrieve-image")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_router(router.clone()))
        .and_then(handlers::retrieve_image_handler);

    // GET /images
    let list_images = warp::path("images")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_router(router))
        .and_then(handlers::list_images_handler);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    chat.or(save_image)
        .or(retrieve_image)
        .or(list_images)
        .or(health)
        .recover(handlers::handle_rejection)
}

fn with_router(
    router: CommandRouter,
) -> impl Filter<Extract = (CommandRouter,), Error = Infallible> + Clone {
    warp::any().map(move || router.clone())
}
