pub use crate::common::RouteResult;

use std::env;
use std::sync::Arc;

use axum::extract::FromRef;
use axum::Router;
use database::PgDatabase;
use routing::RoutingProvider;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod common;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub database: PgDatabase,
    pub routing: Arc<dyn RoutingProvider>,
}

pub async fn start_web_server(state: WebState) -> std::io::Result<()> {
    let routes = Router::new()
        .nest_service("/api", api::routes(state))
        .layer(TraceLayer::new_for_http());

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    let listener = TcpListener::bind(&bind_addr).await?;
    log::info!("listening on {bind_addr}");
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
