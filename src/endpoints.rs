pub(crate) mod home;
pub(crate) mod search;
pub(crate) mod not_found;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::SharedState;
use self::{
    home::home,
    not_found::not_found,
    search::search
};

pub fn get_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home))
        .route("/search", get(search))
        .nest_service("/assets", ServeDir::new("static"))
        .fallback(not_found)
}
