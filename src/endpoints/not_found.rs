use askama::Template;
use axum::{http::Uri, response::Html};
use hyper::StatusCode;
use tracing::debug;

use crate::{errors::ViewError, templates::NotFound};

pub async fn not_found(uri: Uri) -> Result<(StatusCode, Html<String>), ViewError> {
    debug!("No route for {}", uri);
    let not_found = NotFound {};

    Ok((StatusCode::NOT_FOUND, Html(not_found.render()?)))
}
