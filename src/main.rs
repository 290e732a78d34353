use std::net::SocketAddr;

use tamil_news_api::{build_app, config::Config, db};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::init_db(&config)?;
    let stats = pool.stats().await.stats;
    tracing::info!(
        "📊 Datos de demo cargados: {} categorías, {} noticias",
        stats.total_categories,
        stats.total_news
    );
    tracing::info!("⚠️  Datos en memoria: nada se guarda al reiniciar");

    let app = build_app(pool, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Tamil News (DEMO) corriendo en http://{}", addr);
    tracing::info!("🔑 Login de demo: {} / {}", config.demo.email, config.demo.password);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
