// Image handlers: POST /save-image, POST /retrieve-image, GET /images

use crate::commands::CommandRouter;
use crate::models::{ImageListResponse, RetrieveImageRequest, SaveImageRequest};
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::Reply;

use super::{error_reply, respond};

pub async fn save_image_handler(
    request: SaveImageRequest,
    router: CommandRouter,
) -> Result<warp::reply::Response, Infallible> {
    tracing::info!(name = %request.name, "POST /save-image");
    Ok(respond(router.save_image(&request.name, &request.url).await))
}

pub async fn retrieve_image_handler(
    request: RetrieveImageRequest,
    router: CommandRouter,
) -> Result<warp::reply::Response, Infallible> {
    tracing::info!(name = %request.name, "POST /retrieve-image");
    Ok(respond(router.retrieve_image(&request.name).await))
}

pub async fn list_images_handler(
    router: CommandRouter,
) -> Result<warp::reply::Response, Infallible> {
    tracing::info!("GET /images");
    match router.list_images().await {
        Ok(images) => Ok(warp::reply::with_status(
            warp::reply::json(&ImageListResponse { images }),
            StatusCode::OK,
        )
        .into_response()),
        Err(err) => Ok(error_reply(err.status_code(), err.to_string())),
    }
}
