mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conf = leptos::prelude::get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let options = conf.leptos_options;
    let addr = config::listen_addr(options.site_addr, std::env::var("PORT").ok().as_deref())?;

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "auth portal listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
