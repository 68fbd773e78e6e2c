use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use cities::{
    config::Config,
    database::{MemoryPlaceStore, PgPlaceStore, PlaceStore},
    endpoints::get_router,
    telemetry::init_tracing,
    SharedState, State
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let places: Arc<dyn PlaceStore> = match &config.database_url {
        Some(database_url) => Arc::new(PgPlaceStore::connect(database_url).await?),
        None => {
            warn!("DATABASE_URL is not set, serving an empty in-memory store!");
            Arc::new(MemoryPlaceStore::new())
        }
    };
    let shared_state: SharedState = Arc::new(State::new(places));

    info!("Initializing service...");

    let app = get_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
        )
        .with_state(shared_state);

    let listener = tokio::net::TcpListener::bind(config.address)
        .await?;

    info!("Service now listening on {}", config.address);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>()
    ).await?;

    Ok(())
}
