use std::sync::Arc;

use database::{DatabaseConnectionInfo, PgDatabase};
use routing::OpenRouteServiceClient;
use web::{start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();
    tracing_subscriber::fmt::init();

    // database
    let database_connection_info =
        DatabaseConnectionInfo::from_env().expect("expected database connection info in env.");
    let database = PgDatabase::connect(&database_connection_info)
        .await
        .expect("could not connect to database.");

    // routing provider
    let routing = Arc::new(OpenRouteServiceClient::from_env());

    // web server
    let web_future = start_web_server(WebState { database, routing });

    let _ = web_future.await;
}
