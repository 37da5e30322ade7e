use anyhow::Context;
use docjson_todo::{AppState, app::router::build_router, config::Config, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let db = db::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to open the sqlite database")?;
    db::migrate(&db)
        .await
        .context("failed to run database migrations")?;

    let state = AppState {
        db,
        docs: config.docs.clone(),
    };
    let app = build_router(state);

    tracing::info!(
        profile = ?config.docs.profile,
        page_size = config.docs.page_size,
        "listening on http://{}",
        config.bind_addr
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
