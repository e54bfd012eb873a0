use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tgextract::api::{create_router, AppState};
use tgextract::config::Config;
use tgextract::gemini::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tgextract=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.server.secret.is_none() {
        // The secret is provisioned alongside the API key but no route
        // enforces it yet; see DESIGN.md.
        tracing::warn!("SECRET is not set — caller authentication is not configured.");
    }

    tracing::info!("Initializing Gemini client...");
    let gemini = GeminiClient::new(&config.gemini)
        .map_err(|e| anyhow::anyhow!("Gemini client unavailable: {e}"))?;
    tracing::info!(
        "Gemini models: image={}, audio={}",
        config.gemini.image_model,
        config.gemini.audio_model
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, gemini);
    let app = create_router(state);

    tracing::info!("tgextract starting on http://{}", addr);
    tracing::info!("  Extraction:   POST http://{}/telegram", addr);
    tracing::info!("  Health check: http://{}/health", addr);
    tracing::info!("  OpenAPI spec: http://{}/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
