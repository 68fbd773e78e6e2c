use std::net::SocketAddr;

use askama::Template;
use axum::{extract::{ConnectInfo, Query, State}, response::Html};
use tracing::{debug, info};

use crate::{errors::ViewError, search::{PlaceFilter, SearchParams}, templates::SearchResults, SharedState};

pub async fn search(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<SearchParams>
) -> Result<Html<String>, ViewError> {
    info!("[{}] Received GET request on /search", addr);

    let filter = PlaceFilter::from(params);
    let places = state.places().search(&filter).await?;
    debug!("[{}] Found {} place(s) matching {:?}", addr, places.len(), filter.term());

    let search_results = SearchResults {
        places,
        query: filter.term().to_string()
    };

    Ok(Html(search_results.render()?))
}
