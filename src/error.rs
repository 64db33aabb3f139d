use axum::http::StatusCode;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// The favorite being created already exists. Rendered as 400, not 409.
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Internal error whose client-facing message is the source's own text.
    pub fn internal_from_source(context: &str, source: impl std::fmt::Display) -> Self {
        let message = source.to_string();
        tracing::error!(context, error = %message, "store operation failed");
        Self::Internal(message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::AppError;

    #[test]
    fn duplicate_favorite_maps_to_bad_request() {
        let err = AppError::conflict("This favorite already exists");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "This favorite already exists");
    }

    #[test]
    fn internal_from_source_exposes_source_text() {
        let err = AppError::internal_from_source("create favorite", "UNIQUE constraint failed");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "UNIQUE constraint failed");
    }
}
