use axum::response::{IntoResponse, Response};
use hyper::StatusCode;
use tracing::error;

pub fn internal_error(err: ViewError) -> (StatusCode, String) {
    match err {
        ViewError::DatabaseConnection(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Unable to connect to the database!".into()),
        ViewError::Query(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Unable to look up places!".into()),
        ViewError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Unable to render the page!".into()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// Internal Server Error, code 500
    /// The pool could not hand out a connection.
    #[error("failed to check out a database connection: {0}")]
    DatabaseConnection(String),

    /// Internal Server Error, code 500
    #[error("place query failed: {0}")]
    Query(#[from] diesel::result::Error),

    /// Internal Server Error, code 500
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for ViewError {

    fn into_response(self) -> Response {
        error!("{}", self);
        internal_error(self).into_response()
    }

}
