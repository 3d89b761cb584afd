mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::service_area::ServiceAreaResolver;

pub fn build_router(resolver: ServiceAreaResolver) -> Router {
    let state = Arc::new(AppState { resolver });

    Router::new()
        .route("/api/service-areas", get(handlers::service_areas))
        .route("/api/cities", get(handlers::city_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(resolver: ServiceAreaResolver, host: &str, port: u16) {
    let app = build_router(resolver);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Radiusmap server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}
