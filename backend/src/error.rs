use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Config(String),
    Io(std::io::Error),
    /// The built frontend has no index.html.
    MissingBundle,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::MissingBundle => write!(f, "frontend bundle not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::MissingBundle => (StatusCode::NOT_FOUND, "Not Found"),
            Error::Config(_) | Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server Error"),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
