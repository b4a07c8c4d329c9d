use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use collision::EngineError;
use plot::RenderError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("not found")]
    NotFound,

    #[error("engine failure: {0}")]
    Engine(#[from] EngineError),

    #[error("render failure: {0}")]
    Render(#[from] RenderError),

    #[error("response encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validated parameters are missing {0}")]
    Incomplete(&'static str),

    #[error("worker failed: {0}")]
    Worker(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = match self {
            ServerError::NotFound => "404 Not Found",
            _ => "500 Internal Server Error",
        };
        (self.status(), [(header::CONTENT_TYPE, "text/plain")], body).into_response()
    }
}
