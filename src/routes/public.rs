use axum::{Router, routing::get};

use crate::{
    response::{ApiResult, JsonResponse, MessageBody},
    routes::route_list::{RouteInfo, routes},
};

pub const HELLO_MESSAGE: &str = "Hello, this is your GET /user response ";

pub fn router() -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/user", get(hello))
}

async fn sitemap() -> ApiResult<&'static [RouteInfo]> {
    JsonResponse::ok(routes())
}

async fn hello() -> ApiResult<MessageBody> {
    JsonResponse::ok(MessageBody::new(HELLO_MESSAGE))
}
