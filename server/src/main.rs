mod config;
mod error;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Missing .env is normal in production.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    let origin = config.public_origin.clone();

    let state = state::AppState::new(config);
    let app = routes::app(state, routes::leptos_options());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, %origin, "vorrenti listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
