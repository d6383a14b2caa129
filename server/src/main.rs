mod config;
mod routes;
mod services;
mod state;


#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    if let Some(seed) = config.seed {
        tracing::info!(seed, "using fixed RNG seed");
    }
    let state = state::AppState::new(config.seed);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await.expect("server failed");
}
