use wellness_api::{build_router, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from `WELLNESS_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WELLNESS_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let config = ApiConfig::from_env()?;
    let app = build_router();

    let addr = config.bind_addr();
    tracing::info!("wellness_api: listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
