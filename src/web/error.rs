//! Error responses

use crate::locate::LocateError;
use crate::query::QueryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors returned to HTTP clients
#[derive(Debug)]
pub enum ApiError {
    /// 400 with the given body
    BadRequest(String),
    /// 500 with the given body
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::MissingPattern => Self::BadRequest(String::new()),
            QueryError::InvalidRegex(e) => Self::BadRequest(e.to_string()),
        }
    }
}

impl From<LocateError> for ApiError {
    // Subprocess details stay in the server log.
    fn from(_: LocateError) -> Self {
        Self::Internal(String::new())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest(body) | Self::Internal(body) => body,
        };
        (status, body).into_response()
    }
}
