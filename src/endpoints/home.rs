use std::net::SocketAddr;

use askama::Template;
use axum::{extract::ConnectInfo, response::Html};
use tracing::info;

use crate::{errors::ViewError, templates::Home};

pub async fn home(
    ConnectInfo(addr): ConnectInfo<SocketAddr>
) -> Result<Html<String>, ViewError> {
    info!("[{}] Received GET request on /", addr);
    let home_template = Home;

    Ok(Html(home_template.render()?))
}
