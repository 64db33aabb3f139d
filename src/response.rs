use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

pub type ApiResult<T> = Result<JsonResponse<T>, AppError>;

/// Success body with an explicit status. Lists and records are emitted bare.
#[derive(Debug)]
pub struct JsonResponse<T: Serialize> {
    pub status: StatusCode,
    pub body: T,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn ok(body: T) -> ApiResult<T> {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn created(body: T) -> ApiResult<T> {
        Self::with_status(StatusCode::CREATED, body)
    }

    pub fn with_status(status: StatusCode, body: T) -> ApiResult<T> {
        Ok(Self { status, body })
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub msg: String,
}

impl MessageBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub status: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: true,
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ErrorBody::new(self.status(), self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use super::{JsonResponse, MessageBody};
    use crate::error::AppError;

    async fn into_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        (status, serde_json::from_slice(&bytes).expect("body should be json"))
    }

    #[tokio::test]
    async fn not_found_renders_error_envelope() {
        let (status, body) =
            into_json(AppError::not_found("Character does not exist").into_response()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": true, "status": 404, "message": "Character does not exist" })
        );
    }

    #[tokio::test]
    async fn created_message_keeps_status_and_plain_body() {
        let response = JsonResponse::created(MessageBody::new("The favorite was added"))
            .expect("response should build")
            .into_response();
        let (status, body) = into_json(response).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "msg": "The favorite was added" }));
    }
}
