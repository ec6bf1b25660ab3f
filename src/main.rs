use std::net::SocketAddr;

use campus_otp_api::{build_router, config::AppConfig, cors_layer, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();
    let missing = config.missing_required();
    if !missing.is_empty() {
        // Keep serving anyway; the affected operations fail per request.
        tracing::error!(
            missing = ?missing,
            "Missing required environment variables"
        );
    }

    let state = AppState::from_config(&config);
    let app = build_router(state, cors_layer(config.cors_origin.as_deref()));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
