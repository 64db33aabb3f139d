use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{error::AppError, logging::panic_message};

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

/// The panic hook has already logged the payload. Release builds keep it
/// out of the response body.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if cfg!(debug_assertions) {
        format!("internal server error: {}", panic_message(payload.as_ref()))
    } else {
        "internal server error".to_string()
    };
    AppError::Internal(message).into_response()
}
