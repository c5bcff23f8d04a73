pub mod handlers;
mod types;

pub use types::ErrorResponse;

use crate::{Result, config::Config, pipeline::Analyzer};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/mbti", post(handlers::mbti_analysis))
        .route("/api/mbti-analysis", post(handlers::mbti_analysis))
        .route("/animal", post(handlers::spirit_animal))
        .route("/color", post(handlers::color_mood))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize analyzer with its model and photo clients
    let analyzer = Analyzer::from_config(&config)?;

    let app_state = AppState {
        analyzer: Arc::new(analyzer),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
